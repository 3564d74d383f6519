mod inline_fragment_tests;
mod operation_tests;
mod selection_set_tests;
