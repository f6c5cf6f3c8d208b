mod reference_test;
