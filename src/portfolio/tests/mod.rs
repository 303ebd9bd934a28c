mod portfolio_calculator_tests;
