mod application;
mod test_error;
mod utils;
