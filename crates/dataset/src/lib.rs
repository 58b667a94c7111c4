//! Static high-speed-rail dataset, the map store, and shared utilities.
//!
//! This is the leaf crate of the workspace: `rendering` and `ui` both depend
//! on it for the data model and the single source of truth for selection and
//! camera state.

use bevy::prelude::*;

pub mod basemap;
pub mod colors;
pub mod config;
pub mod fault;
pub mod format;
pub mod network;
pub mod route;
pub mod station;
pub mod store;

use fault::{FaultState, ReloadRequested};
use network::RailNetwork;
use store::MapStore;

pub struct DatasetPlugin;

impl Plugin for DatasetPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MapStore>()
            .init_resource::<FaultState>()
            .add_event::<ReloadRequested>()
            .add_systems(Startup, load_network)
            .add_systems(Update, handle_reload);
    }
}

/// Parses the embedded dataset. On failure the network resource is never
/// inserted and the fault screen takes over.
fn load_network(mut commands: Commands, mut fault: ResMut<FaultState>) {
    insert_network(&mut commands, &mut fault);
}

/// Full-reload path: reset the store to defaults and load again.
fn handle_reload(
    mut events: EventReader<ReloadRequested>,
    mut commands: Commands,
    mut fault: ResMut<FaultState>,
    mut store: ResMut<MapStore>,
) {
    if events.read().next().is_none() {
        return;
    }
    *store = MapStore::default();
    fault.clear();
    insert_network(&mut commands, &mut fault);
}

fn insert_network(commands: &mut Commands, fault: &mut FaultState) {
    match RailNetwork::load_embedded() {
        Ok(network) => {
            info!(
                "dataset loaded: {} routes, {} stations, {} basemap lines",
                network.routes.len(),
                network.stations.len(),
                network.basemap.len()
            );
            commands.insert_resource(network);
        }
        Err(err) => {
            error!("dataset load failed: {err}");
            fault.report(err.to_string());
        }
    }
}
