//! Composition root: wires storage, HTTP clients and pages together.

use anyhow::{Context, Result};
use brainstorm_application::{
    AdminConsole, AuthGate, BrainstormWizard, HomePage, IdeaSaver, InquiryDesk, SessionLinker,
};
use brainstorm_core::config::{ApiConfig, ApiOverrides, Environment};
use brainstorm_core::storage::KeyValueStore;
use brainstorm_infrastructure::{
    AppApiClient, BrainstormApiClient, BrainstormPaths, ConfigService, FileKeyValueStore,
    MemoryKeyValueStore,
};
use std::sync::Arc;

use crate::GlobalArgs;
use crate::notifier::TerminalNotifier;

pub fn resolve_paths(args: &GlobalArgs) -> Result<BrainstormPaths> {
    BrainstormPaths::new(args.config_dir.clone()).context("failed to resolve config directory")
}

pub struct App {
    pub paths: BrainstormPaths,
    pub config: ApiConfig,
    pub storage: Arc<dyn KeyValueStore>,
    pub gate: Arc<AuthGate>,
    pub home: HomePage,
    pub wizard: BrainstormWizard,
    pub desk: InquiryDesk,
    pub admin: AdminConsole,
}

impl App {
    pub fn build(args: &GlobalArgs, paths: BrainstormPaths) -> Result<Self> {
        let config = ConfigService::new(paths.config_file())
            .resolve(cli_overrides(args)?)
            .context("invalid API configuration")?;

        let storage: Arc<dyn KeyValueStore> = if args.no_persist {
            Arc::new(MemoryKeyValueStore::new())
        } else {
            Arc::new(FileKeyValueStore::new(paths.local_storage_file()))
        };
        let app_api =
            Arc::new(AppApiClient::new(&config.app_api_base).with_token_store(storage.clone()));
        let ai_api = Arc::new(BrainstormApiClient::new(&config.ai_api_base));
        let notifier = Arc::new(TerminalNotifier::new(args.yes));

        let gate = Arc::new(AuthGate::new(app_api.clone(), storage.clone(), notifier.clone()));
        let linker = SessionLinker::new(app_api.clone(), storage.clone(), notifier.clone());
        let home = HomePage::new(gate.clone(), linker, app_api.clone(), notifier.clone());
        let saver = IdeaSaver::new(
            app_api.clone(),
            app_api.clone(),
            ai_api.clone(),
            storage.clone(),
            notifier.clone(),
        );
        let wizard = BrainstormWizard::new(ai_api, saver, notifier.clone());
        let desk = InquiryDesk::new(gate.clone(), app_api.clone(), notifier.clone());
        let admin = AdminConsole::new(gate.clone(), app_api, notifier);

        tracing::debug!(
            app = %config.app_api_base,
            ai = %config.ai_api_base,
            persist = !args.no_persist,
            "client assembled"
        );

        Ok(Self {
            paths,
            config,
            storage,
            gate,
            home,
            wizard,
            desk,
            admin,
        })
    }
}

fn cli_overrides(args: &GlobalArgs) -> Result<ApiOverrides> {
    let environment = args
        .env
        .as_deref()
        .map(str::parse::<Environment>)
        .transpose()
        .context("invalid --env")?;
    Ok(ApiOverrides {
        environment,
        origin: args.origin.clone(),
        app_api_base: args.app_api.clone(),
        ai_api_base: args.ai_api.clone(),
    })
}
