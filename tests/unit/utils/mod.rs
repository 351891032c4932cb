mod test_phone;
mod test_time;
