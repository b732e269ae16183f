//! Operator-facing summaries rendered from templates.

use std::path::Path;

use minijinja::{Environment, UndefinedBehavior, Value, context};

use crate::domain::{AppError, DeploymentConfig};

const SUMMARY_TEMPLATE: &str = "\
Installation summary
  Server address : {{ server_address }}
  Hostname       : {{ hostname }}{% if not use_domain %} (local, no DNS){% endif %}
  External URL   : {{ external_url }}
  HTTPS          : {% if use_tls %}Let's Encrypt (contact {{ contact_email }}){% else %}disabled{% endif %}";

const COMPLETION_TEMPLATE: &str = "\
✅ GitLab is installed at {{ external_url }}
  Username : root
{% if password -%}
{{ '  ' }}Password : {{ password }}
  ⚠️  {{ password_path }} is deleted automatically after 24 hours; store the password now.
{%- else -%}
{{ '  ' }}Password : not found in {{ password_path }}; reset it with: gitlab-rake \"gitlab:password:reset[root]\"
{%- endif %}
  Backups  : /var/opt/gitlab/backups";

/// Summary shown at the confirmation gate.
pub fn render_summary(config: &DeploymentConfig) -> Result<String, AppError> {
    render(
        "summary",
        SUMMARY_TEMPLATE,
        context! {
            server_address => config.server_address(),
            hostname => config.hostname(),
            use_domain => config.use_domain(),
            external_url => config.external_url(),
            use_tls => config.use_tls(),
            contact_email => config.contact_email(),
        },
    )
}

/// Final report with login details.
pub fn render_completion(
    config: &DeploymentConfig,
    password: Option<&str>,
    password_path: &Path,
) -> Result<String, AppError> {
    render(
        "completion",
        COMPLETION_TEMPLATE,
        context! {
            external_url => config.external_url(),
            password => password,
            password_path => password_path.display().to_string(),
        },
    )
}

fn render(name: &str, source: &str, context: Value) -> Result<String, AppError> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.add_template(name, source)
        .map_err(|err| AppError::Render(format!("{} template: {}", name, err)))?;
    env.get_template(name)
        .and_then(|template| template.render(context))
        .map_err(|err| AppError::Render(format!("{} template: {}", name, err)))
}
