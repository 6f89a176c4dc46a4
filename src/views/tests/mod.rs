
mod progress_calculator_tests;
mod views_service_tests;
