pub mod check;
pub mod init;
pub mod projects;
pub mod run;
pub mod story;
