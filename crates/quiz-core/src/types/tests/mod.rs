mod runtime_type_tests;
