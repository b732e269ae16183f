pub mod configure;
pub mod confirm;
pub mod credential;
pub mod dns_check;
pub mod firewall;
pub mod gather;
pub mod install;
pub mod maintenance;
pub mod packages;
pub mod preflight;
