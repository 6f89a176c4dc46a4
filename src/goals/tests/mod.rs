mod goals_repository_tests;
