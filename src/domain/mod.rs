pub mod answers;
pub mod credential;
pub mod deployment;
pub mod error;
pub mod gitlab_rb;
pub mod settings;

pub use answers::{Answers, UrlSource};
pub use credential::parse_initial_password;
pub use deployment::{DEFAULT_LOCAL_HOSTNAME, DeploymentConfig, LetsEncrypt, resolve};
pub use error::AppError;
pub use gitlab_rb::KeyLine;
pub use settings::InstallerSettings;
