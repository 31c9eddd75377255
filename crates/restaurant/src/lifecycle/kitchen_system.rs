use crate::clients::{InventoryClient, TrackerClient};
use crate::config::RestaurantConfig;
use crate::coordinator::{Restaurant, Roster};
use crate::inventory::{self, InventoryError, InventoryLedger};
use crate::model::{Menu, MenuError, OrderSequence};
use crate::storage::{FileStore, InventoryStore};
use crate::tracker::{self, OrderTracker};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;
use tokio::fs;
use tracing::{error, info, warn};

/// Errors that stop the restaurant from opening.
#[derive(Debug, Error)]
pub enum BootError {
    #[error("cannot read menu {path}: {source}")]
    MenuFile {
        path: String,
        source: std::io::Error,
    },
    #[error(transparent)]
    Menu(#[from] MenuError),
    #[error("inventory initialization failed: {0}")]
    Inventory(#[from] InventoryError),
}

/// The running ledger actors and the clients that reach them.
pub struct KitchenSystem {
    pub tracker_client: TrackerClient,
    pub inventory_client: InventoryClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl KitchenSystem {
    /// Spawns both actors with fresh ledgers. The inventory restores itself from `store`.
    pub fn start(store: Arc<dyn InventoryStore>, capacity: usize) -> Self {
        let (tracker_actor, tracker_client) = tracker::new(OrderTracker::new(), capacity);
        let (inventory_actor, inventory_client) = inventory::new(InventoryLedger::new(), capacity);

        let tracker_handle = tokio::spawn(tracker_actor.run(()));
        let inventory_handle = tokio::spawn(inventory_actor.run(store));

        Self {
            tracker_client: TrackerClient::new(tracker_client),
            inventory_client: InventoryClient::new(inventory_client),
            handles: vec![tracker_handle, inventory_handle],
        }
    }

    /// Drops this system's clients and waits for both actors to stop.
    ///
    /// Clones handed out elsewhere must already be gone, or this waits for them.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down kitchen...");

        drop(self.tracker_client);
        drop(self.inventory_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Kitchen shutdown complete.");
        Ok(())
    }
}

/// Opens the restaurant described by `config`, persisting to its data directory.
pub async fn boot(config: &RestaurantConfig) -> Result<(Restaurant, KitchenSystem), BootError> {
    let menu = load_menu(&config.files.menu).await?;
    let store: Arc<dyn InventoryStore> = Arc::new(FileStore::new(&config.storage.data_dir));
    boot_with(menu, config, store).await
}

/// Like [`boot`], with the menu and the store supplied by the caller.
pub async fn boot_with(
    menu: Menu,
    config: &RestaurantConfig,
    store: Arc<dyn InventoryStore>,
) -> Result<(Restaurant, KitchenSystem), BootError> {
    let system = KitchenSystem::start(store, config.actors.channel_capacity);

    let names = menu.ingredient_names().into_iter().collect();
    let outcome = system.inventory_client.initialize(names).await?;
    info!(
        dishes = menu.len(),
        defaulted_minimums = outcome.defaulted_minimums.len(),
        reorders = outcome.reorders.len(),
        "Inventory ready"
    );
    for request in &outcome.reorders {
        info!("Requested {}", request);
    }

    let roster = Roster::new(config.staff.servers.clone(), config.staff.cooks.clone());
    let restaurant = Restaurant::new(
        menu,
        roster,
        system.tracker_client.clone(),
        system.inventory_client.clone(),
        OrderSequence::new(),
    );
    Ok((restaurant, system))
}

/// Reads and parses the menu; a missing file is an empty menu.
pub async fn load_menu(path: &Path) -> Result<Menu, BootError> {
    match fs::read_to_string(path).await {
        Ok(text) => Ok(Menu::parse(&text)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            warn!(path = %path.display(), "No menu file, opening with an empty menu");
            Ok(Menu::default())
        }
        Err(source) => Err(BootError::MenuFile {
            path: path.display().to_string(),
            source,
        }),
    }
}
