mod lose_condition_tests;
