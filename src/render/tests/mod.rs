mod tests_type_printer;
