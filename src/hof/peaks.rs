//! Column-wise peak reduction over a company's snapshot history.
//!
//! Every metric is maximized independently, so the peaks of different
//! columns may come from different moments in time. Loan is deliberately
//! not special-cased: the reported figure is the historical ceiling, even
//! though a loan can be paid back down.

use serde::Serialize;

use crate::db::models::{EconomySnapshot, InfrastructureSnapshot};

/// Best-ever economy figures of one company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EconomyPeaks {
    pub income: i64,
    pub loan: i64,
    pub money: i64,
    pub value: i64,
    pub performance: i32,
}

/// Best-ever vehicle and facility counts of one company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InfrastructurePeaks {
    pub busses: i32,
    pub lorries: i32,
    pub trains: i32,
    pub ships: i32,
    pub planes: i32,
    pub bus_stops: i32,
    pub lorry_depots: i32,
    pub train_stations: i32,
    pub harbours: i32,
    pub airports: i32,
}

/// Reduce an economy history to its per-column maxima.
///
/// `None` for an empty history — a company that never reported is absent,
/// not zeroed. Input order is irrelevant.
pub fn economy_peaks(history: &[EconomySnapshot]) -> Option<EconomyPeaks> {
    let mut snapshots = history.iter();
    let first = snapshots.next()?;
    let mut peaks = EconomyPeaks {
        income: first.income,
        loan: first.loan,
        money: first.money,
        value: first.value,
        performance: first.performance,
    };
    for snap in snapshots {
        peaks.income = peaks.income.max(snap.income);
        peaks.loan = peaks.loan.max(snap.loan);
        peaks.money = peaks.money.max(snap.money);
        peaks.value = peaks.value.max(snap.value);
        peaks.performance = peaks.performance.max(snap.performance);
    }
    Some(peaks)
}

/// Reduce an infrastructure history to its per-column maxima.
pub fn infrastructure_peaks(history: &[InfrastructureSnapshot]) -> Option<InfrastructurePeaks> {
    let mut snapshots = history.iter();
    let first = snapshots.next()?;
    let mut peaks = InfrastructurePeaks {
        busses: first.busses,
        lorries: first.lorries,
        trains: first.trains,
        ships: first.ships,
        planes: first.planes,
        bus_stops: first.bus_stops,
        lorry_depots: first.lorry_depots,
        train_stations: first.train_stations,
        harbours: first.harbours,
        airports: first.airports,
    };
    for snap in snapshots {
        peaks.busses = peaks.busses.max(snap.busses);
        peaks.lorries = peaks.lorries.max(snap.lorries);
        peaks.trains = peaks.trains.max(snap.trains);
        peaks.ships = peaks.ships.max(snap.ships);
        peaks.planes = peaks.planes.max(snap.planes);
        peaks.bus_stops = peaks.bus_stops.max(snap.bus_stops);
        peaks.lorry_depots = peaks.lorry_depots.max(snap.lorry_depots);
        peaks.train_stations = peaks.train_stations.max(snap.train_stations);
        peaks.harbours = peaks.harbours.max(snap.harbours);
        peaks.airports = peaks.airports.max(snap.airports);
    }
    Some(peaks)
}
