use tokio_util::sync::CancellationToken;
use tracing::{error, info};

use crate::app::error::PanelError;
use crate::app::state::{FetchOutcome, FetchTicket};
use crate::app::{App, AppEvent};
use crate::domain::file::{FileEntry, Location};
use crate::infra::file_store::StoreError;

impl App {
    /// Selects `location` and fetches its inventory.
    ///
    /// The in-flight fetch of the previous location is cancelled; selecting
    /// the current location is a no-op.
    pub fn select_location(&mut self, location: Location) {
        if !self.state.switch_location(location) {
            return;
        }

        info!(%location, "Switched location");
        self.fetch_cancel.cancel();
        self.fetch_cancel = CancellationToken::new();
        self.table_state.select(None);
        self.refresh_inventory();
    }

    /// Switches to the other location.
    pub fn toggle_location(&mut self) {
        self.select_location(self.state.location().toggle());
    }

    /// Issues a fetch for the selected location, tagged so a late result can
    /// be recognized as stale.
    pub fn refresh_inventory(&mut self) {
        let ticket = self.state.begin_fetch();
        let store = self.services.store();
        let event_tx = self.services.event_sender();
        let cancel = self.fetch_cancel.clone();

        self.spawn_task(async move {
            let result = tokio::select! {
                () = cancel.cancelled() => return,
                result = store.list(ticket.location) => result,
            };

            let _ = event_tx.send(AppEvent::InventoryFetched { ticket, result });
        });
    }

    pub(super) fn finish_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<FileEntry>, StoreError>,
    ) {
        match self.state.apply_fetch_result(ticket, result) {
            FetchOutcome::Applied => self.clamp_selection(),
            FetchOutcome::Discarded => {}
            FetchOutcome::Failed(message) => {
                error!(location = %ticket.location, %message, "Inventory fetch failed");
                self.notify_error(&PanelError::Connection(message));
            }
        }
    }
}
