pub mod wordcount;
