//! Settings monitor
//!
//! The public site periodically re-reads the per-type reservation toggles
//! and section-visibility flags so an admin can pull a category without a
//! deploy. Poll failures keep the previous snapshot; a flaky connection
//! never hides the whole site.

use std::time::Duration;

use tokio::sync::watch;
use tokio::time::interval;

use shared::models::{ReservationToggles, SectionVisibility};

use crate::http::HttpClient;

/// Latest known public-site settings
#[derive(Debug, Clone, Default)]
pub struct PublicSettings {
    pub toggles: ReservationToggles,
    pub sections: SectionVisibility,
}

/// Periodic settings poller
pub struct SettingsMonitor {
    http: HttpClient,
    poll_interval: Duration,
}

impl SettingsMonitor {
    pub fn new(http: HttpClient, poll_interval: Duration) -> Self {
        Self {
            http,
            poll_interval,
        }
    }

    /// Start polling in the background; the receiver always holds the most
    /// recent successful snapshot.
    pub fn start(self) -> watch::Receiver<PublicSettings> {
        let (tx, rx) = watch::channel(PublicSettings::default());

        tokio::spawn(async move {
            let mut ticker = interval(self.poll_interval);

            loop {
                ticker.tick().await;

                let (toggles, sections) = tokio::join!(
                    self.http.reservations_enabled_all(),
                    self.http.section_visibility_all(),
                );

                match (toggles, sections) {
                    (Ok(toggles), Ok(sections)) => {
                        if tx.send(PublicSettings { toggles, sections }).is_err() {
                            // All receivers dropped; stop polling.
                            break;
                        }
                    }
                    (t, s) => {
                        if let Err(e) = t {
                            tracing::warn!("settings poll failed (toggles): {e}");
                        }
                        if let Err(e) = s {
                            tracing::warn!("settings poll failed (sections): {e}");
                        }
                    }
                }
            }
        });

        rx
    }
}
