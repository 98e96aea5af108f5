pub mod deploy;
pub mod history;
pub mod init;
pub mod networks;
pub mod profiles;
pub mod resolve;
