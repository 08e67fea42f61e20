pub mod name_query;
