mod frontend_tests;
mod listings_tests;
