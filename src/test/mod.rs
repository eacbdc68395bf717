mod test_level;
