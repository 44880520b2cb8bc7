mod document_tests;
mod tokenizer_tests;
