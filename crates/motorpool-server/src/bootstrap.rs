use motorpool_core::AppError;
use motorpool_core::models::{NewAdministrator, Profile};
use motorpool_db::Database;

/// Seed a first Admin account on a fresh database so the Admin-only
/// registration endpoint is reachable.
///
/// Controlled by `MOTORPOOL_ROOT_EMAIL` and `MOTORPOOL_ROOT_PASSWORD`;
/// when either is absent the step is skipped. Idempotent: an existing
/// account with the configured email is left untouched.
pub async fn ensure_root_administrator(db: &Database) -> Result<(), AppError> {
    let (email, password) = match (
        std::env::var("MOTORPOOL_ROOT_EMAIL"),
        std::env::var("MOTORPOOL_ROOT_PASSWORD"),
    ) {
        (Ok(email), Ok(password)) if !email.is_empty() && !password.is_empty() => (email, password),
        _ => {
            tracing::info!(
                "MOTORPOOL_ROOT_EMAIL/MOTORPOOL_ROOT_PASSWORD not set; skipping bootstrap administrator"
            );
            return Ok(());
        }
    };

    let repo = db.administrator_repo();
    if repo.find_by_email(&email).await?.is_some() {
        return Ok(());
    }

    repo.create(&NewAdministrator {
        email: email.clone(),
        password,
        profile: Profile::Admin,
    })
    .await?;

    tracing::info!("created bootstrap administrator {email}");
    Ok(())
}
