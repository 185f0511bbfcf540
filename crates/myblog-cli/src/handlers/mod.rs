pub mod feed;
pub mod init;
pub mod login;
pub mod logout;
pub mod signup;
pub mod whoami;
