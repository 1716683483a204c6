//! Mints a bearer token for an account.
//!
//! ```text
//! issue_token <user-id>
//! issue_token --create <email> <display-name> [admin|author]
//! ```
use anyhow::{Context, Result, anyhow, bail};
use blogger_core::application::{dto::TokenSubject, ports::security::TokenManager};
use blogger_core::config::AppConfig;
use blogger_core::domain::user::{Role, UserId, UserRepository};
use blogger_core::infrastructure::{
    database, repositories::SqliteUserRepository, security::token::BiscuitTokenManager,
};

enum Target {
    Existing(i64),
    Create {
        email: String,
        display_name: String,
        role: Role,
    },
}

fn parse_args(args: &[String]) -> Result<Target> {
    match args {
        [id] => Ok(Target::Existing(
            id.parse().with_context(|| format!("invalid user id {id:?}"))?,
        )),
        [flag, email, display_name, rest @ ..] if flag == "--create" && rest.len() <= 1 => {
            let role = match rest.first() {
                Some(raw) => raw.parse::<Role>()?,
                None => Role::Author,
            };
            Ok(Target::Create {
                email: email.clone(),
                display_name: display_name.clone(),
                role,
            })
        }
        _ => bail!(
            "usage: issue_token <user-id> | issue_token --create <email> <display-name> [admin|author]"
        ),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let target = parse_args(&args)?;
    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url(), 1).await?;
    database::run_migrations(&pool).await?;
    let users = SqliteUserRepository::new(pool);

    let user = match target {
        Target::Existing(id) => users
            .find_by_id(UserId::new(id)?)
            .await?
            .ok_or_else(|| anyhow!("no user with id {id}"))?,
        Target::Create {
            email,
            display_name,
            role,
        } => {
            users
                .create(&email, &display_name, role, chrono::Utc::now())
                .await?
        }
    };
    if !user.is_active {
        bail!("user {} is disabled", user.id.0);
    }

    let manager = BiscuitTokenManager::new(config.biscuit_private_key(), config.token_ttl())?;
    let token = manager
        .issue(TokenSubject {
            user_id: user.id,
            display_name: user.display_name.clone(),
            role: user.role,
        })
        .await?;

    eprintln!(
        "user {} ({}) role={} expires {}",
        user.id.0,
        user.email,
        user.role.as_str(),
        token.expires_at.to_rfc3339()
    );
    println!("{}", token.token);
    Ok(())
}
