// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        ApplicationResult,
        commands::{
            categories::CategoryCommandService,
            favourites::FavouriteCommandService,
            recipes::RecipeCommandService,
            reviews::ReviewCommandService,
            users::{AccountSettings, UserCommandService},
        },
        dto::AuthenticatedUser,
        error::ApplicationError,
        ports::{
            notify::AccountNotifier,
            security::{ActivationTokenService, PasswordHasher, TokenManager},
            session_revocation::SessionRevocationStore,
            time::Clock,
            util::SlugGenerator,
        },
        queries::{
            categories::CategoryQueryService,
            favourites::FavouriteQueryService,
            recipes::{RecipeAssembler, RecipeQueryService},
            users::UserQueryService,
        },
    },
    domain::{
        category::CategoryRepository,
        favourite::FavouriteRepository,
        recipe::{RecipeReadRepository, RecipeWriteRepository},
        review::ReviewRepository,
        slug::{DEFAULT_MAX_ATTEMPTS, SlugLookup, SlugResolver},
        user::UserRepository,
    },
};

/// Repositories and adapters the application is wired from.
pub struct ApplicationDependencies {
    pub user_repo: Arc<dyn UserRepository>,
    pub category_repo: Arc<dyn CategoryRepository>,
    pub recipe_write_repo: Arc<dyn RecipeWriteRepository>,
    pub recipe_read_repo: Arc<dyn RecipeReadRepository>,
    pub review_repo: Arc<dyn ReviewRepository>,
    pub favourite_repo: Arc<dyn FavouriteRepository>,
    pub slug_lookup: Arc<dyn SlugLookup>,
    pub password_hasher: Arc<dyn PasswordHasher>,
    pub token_manager: Arc<dyn TokenManager>,
    pub activation_tokens: Arc<dyn ActivationTokenService>,
    pub notifier: Arc<dyn AccountNotifier>,
    pub session_revocation_store: Arc<dyn SessionRevocationStore>,
    pub clock: Arc<dyn Clock>,
    pub slugger: Arc<dyn SlugGenerator>,
}

#[derive(Debug, Clone)]
pub struct ApplicationSettings {
    pub account: AccountSettings,
    pub slug_max_attempts: u32,
}

impl Default for ApplicationSettings {
    fn default() -> Self {
        Self {
            account: AccountSettings::default(),
            slug_max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub user_queries: Arc<UserQueryService>,
    pub category_commands: Arc<CategoryCommandService>,
    pub category_queries: Arc<CategoryQueryService>,
    pub recipe_commands: Arc<RecipeCommandService>,
    pub recipe_queries: Arc<RecipeQueryService>,
    pub review_commands: Arc<ReviewCommandService>,
    pub favourite_commands: Arc<FavouriteCommandService>,
    pub favourite_queries: Arc<FavouriteQueryService>,
    token_manager: Arc<dyn TokenManager>,
    session_revocation_store: Arc<dyn SessionRevocationStore>,
}

impl ApplicationServices {
    pub fn new(deps: ApplicationDependencies, settings: ApplicationSettings) -> Self {
        let slug_resolver = Arc::new(
            SlugResolver::new(Arc::clone(&deps.slug_lookup), Arc::clone(&deps.slugger))
                .with_max_attempts(settings.slug_max_attempts),
        );
        let assembler = Arc::new(RecipeAssembler::new(
            Arc::clone(&deps.review_repo),
            Arc::clone(&deps.favourite_repo),
        ));

        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&deps.user_repo),
            Arc::clone(&deps.password_hasher),
            Arc::clone(&deps.token_manager),
            Arc::clone(&deps.activation_tokens),
            Arc::clone(&deps.notifier),
            Arc::clone(&deps.session_revocation_store),
            Arc::clone(&deps.clock),
            settings.account,
        ));
        let user_queries = Arc::new(UserQueryService::new(Arc::clone(&deps.user_repo)));

        let category_commands = Arc::new(CategoryCommandService::new(
            Arc::clone(&deps.category_repo),
            Arc::clone(&slug_resolver),
            Arc::clone(&deps.clock),
        ));
        let category_queries = Arc::new(CategoryQueryService::new(Arc::clone(&deps.category_repo)));

        let recipe_commands = Arc::new(RecipeCommandService::new(
            Arc::clone(&deps.recipe_write_repo),
            Arc::clone(&deps.recipe_read_repo),
            Arc::clone(&deps.category_repo),
            Arc::clone(&slug_resolver),
            Arc::clone(&assembler),
            Arc::clone(&deps.clock),
        ));
        let recipe_queries = Arc::new(RecipeQueryService::new(
            Arc::clone(&deps.recipe_read_repo),
            Arc::clone(&assembler),
        ));

        let review_commands = Arc::new(ReviewCommandService::new(
            Arc::clone(&deps.review_repo),
            Arc::clone(&deps.recipe_read_repo),
            Arc::clone(&deps.clock),
        ));

        let favourite_commands = Arc::new(FavouriteCommandService::new(
            Arc::clone(&deps.favourite_repo),
            Arc::clone(&deps.recipe_read_repo),
            Arc::clone(&deps.clock),
        ));
        let favourite_queries = Arc::new(FavouriteQueryService::new(
            Arc::clone(&deps.recipe_read_repo),
            Arc::clone(&assembler),
        ));

        Self {
            user_commands,
            user_queries,
            category_commands,
            category_queries,
            recipe_commands,
            recipe_queries,
            review_commands,
            favourite_commands,
            favourite_queries,
            token_manager: deps.token_manager,
            session_revocation_store: deps.session_revocation_store,
        }
    }

    /// Authenticate a raw bearer token and reject tokens whose session was revoked.
    pub async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let user = self.token_manager.authenticate(token).await?;

        if let Some(session_id) = &user.session_id {
            if self.session_revocation_store.is_revoked(session_id).await? {
                return Err(ApplicationError::unauthorized("session revoked"));
            }
        }

        Ok(user)
    }
}
