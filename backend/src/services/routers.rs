use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};

use crate::api::RouterStatus;
use crate::models::{RouterId, RouterPing, RouterRecord};

#[derive(Default)]
struct RouterObservation<'a> {
    inventory: Option<&'a RouterRecord>,
    latest_ping: Option<&'a RouterPing>,
}

/// One status row per router known from the inventory or from pings, sorted by id.
///
/// A router is online only when its latest ping at or before `now` is no
/// older than `staleness` and reports it reachable; the inventory's own
/// `online` flag is never trusted on its own. Load comes from that latest
/// ping, then the inventory, then 0.
pub fn compute_router_status(
    inventory: &[&RouterRecord],
    pings: &[&RouterPing],
    now: DateTime<Utc>,
    staleness: Duration,
) -> Vec<RouterStatus> {
    let mut routers: BTreeMap<&str, RouterObservation> = BTreeMap::new();

    for &record in inventory {
        routers.entry(record.id.as_str()).or_default().inventory = Some(record);
    }

    for &ping in pings.iter().filter(|p| p.received_at <= now) {
        let observation = routers.entry(ping.router_id.as_str()).or_default();
        // Equal timestamps: the later input wins
        match observation.latest_ping {
            Some(latest) if latest.received_at > ping.received_at => {}
            _ => observation.latest_ping = Some(ping),
        }
    }

    routers
        .into_iter()
        .map(|(id, observation)| {
            let online = observation
                .latest_ping
                .map(|p| p.reachable && now - p.received_at <= staleness)
                .unwrap_or(false);

            if let Some(record) = observation.inventory {
                if record.online && !online {
                    log::debug!("Router {} reported online but has no fresh ping", id);
                }
            }

            let load_percent = observation
                .latest_ping
                .map(|p| p.load_percent)
                .or_else(|| observation.inventory.map(|r| r.load_percent))
                .unwrap_or(0.0);

            RouterStatus {
                id: RouterId::from(id),
                online,
                load_percent,
                last_seen: observation.latest_ping.map(|p| p.received_at),
            }
        })
        .collect()
}

/// Mean load of the online routers, 0 when none is online.
pub fn mean_online_load(routers: &[RouterStatus]) -> f64 {
    let online: Vec<f64> = routers
        .iter()
        .filter(|r| r.online)
        .map(|r| r.load_percent)
        .collect();
    if online.is_empty() {
        return 0.0;
    }
    online.iter().sum::<f64>() / online.len() as f64
}
