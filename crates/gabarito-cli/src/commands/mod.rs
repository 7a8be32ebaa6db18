pub mod compare;
pub mod drill;
pub mod essay;
pub mod grade;
pub mod init;
pub mod lexicon;
pub mod project;
pub mod validate;
