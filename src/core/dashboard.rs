//! Dashboard statistics aggregation.
//!
//! The admin dashboard is a read-only snapshot assembled from four
//! concurrent reads: the full booking collection plus the three catalog
//! counts. The reads either all succeed or the whole computation fails with
//! an aggregation error, so there are never partial statistics. All of the
//! arithmetic happens in [`aggregate`], a pure function over the snapshot,
//! which keeps the interesting logic testable without a database.

use crate::{
    entities::{Booking, Event, Product, Service, booking, booking::BookingStatus},
    errors::{Error, Result},
};
use chrono::{Datelike, Months, NaiveDate, NaiveDateTime};
use sea_orm::{PaginatorTrait, QueryOrder, prelude::*};
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

/// How many of the newest bookings the dashboard shows.
const RECENT_LIMIT: usize = 5;

/// How far back the monthly activity chart reaches, in calendar months.
const MONTH_WINDOW: u32 = 6;

/// Revenue contributed by a single service name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceRevenue {
    /// Service name exactly as it appeared on the bookings
    pub service: String,
    /// Summed approved revenue in whole KSH
    pub revenue: i64,
    /// Number of approved bookings for this service
    pub count: u64,
}

/// Booking activity inside one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyBookings {
    /// Month label, e.g. "Jan 2026"
    pub month: String,
    /// Bookings created in the month, regardless of status
    pub count: u64,
    /// Approved revenue from bookings created in the month
    pub revenue: i64,
}

/// Complete dashboard snapshot, serialized for the admin SPA.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// All bookings ever submitted
    pub total_bookings: u64,
    /// Catalog size: services
    pub total_services: u64,
    /// Catalog size: events
    pub total_events: u64,
    /// Catalog size: products
    pub total_products: u64,
    /// Bookings awaiting a decision
    pub pending_bookings: u64,
    /// Bookings approved so far
    pub approved_bookings: u64,
    /// Bookings rejected so far
    pub rejected_bookings: u64,
    /// Distinct client emails across all bookings
    pub total_clients: u64,
    /// Summed amount over approved bookings, in whole KSH
    pub total_revenue: i64,
    /// Approved revenue grouped by service name, first-seen order
    pub revenue_by_service: Vec<ServiceRevenue>,
    /// Activity per calendar month over the trailing window, oldest first
    pub bookings_by_month: Vec<MonthlyBookings>,
    /// The five newest bookings, field-complete
    pub recent_bookings: Vec<booking::Model>,
}

/// Computes the dashboard snapshot from the current store contents.
///
/// The four reads run concurrently; the first failure aborts the whole
/// computation. The booking list is fetched newest first, which is the
/// order [`aggregate`] expects.
///
/// # Errors
/// Returns [`Error::Aggregation`] wrapping the first failed read.
pub async fn compute_dashboard_stats(db: &DatabaseConnection) -> Result<DashboardStats> {
    let now = chrono::Utc::now().naive_utc();

    let (bookings, total_services, total_events, total_products) = tokio::try_join!(
        Booking::find()
            .order_by_desc(booking::Column::CreatedAt)
            .all(db),
        Service::find().count(db),
        Event::find().count(db),
        Product::find().count(db),
    )
    .map_err(|source| Error::Aggregation { source })?;

    Ok(aggregate(
        &bookings,
        total_services,
        total_events,
        total_products,
        now,
    ))
}

/// Derives every dashboard figure from a snapshot of the store.
///
/// `bookings` must be sorted newest first; the recent-bookings list is a
/// plain prefix of it. `now` anchors the trailing month window, which spans
/// exactly [`MONTH_WINDOW`] calendar months (not a fixed day count), so a
/// booking created at the window boundary is included.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn aggregate(
    bookings: &[booking::Model],
    total_services: u64,
    total_events: u64,
    total_products: u64,
    now: NaiveDateTime,
) -> DashboardStats {
    let mut pending_bookings = 0;
    let mut approved_bookings = 0;
    let mut rejected_bookings = 0;
    let mut clients: HashSet<&str> = HashSet::new();
    let mut total_revenue = 0;
    let mut revenue_by_service: Vec<ServiceRevenue> = Vec::new();

    let window_start = now
        .checked_sub_months(Months::new(MONTH_WINDOW))
        .unwrap_or(now);
    // Keyed by (year, month) so ordering is chronological, not alphabetical
    let mut months: BTreeMap<(i32, u32), (u64, i64)> = BTreeMap::new();

    for booking in bookings {
        clients.insert(booking.email.as_str());

        let approved = booking.status == BookingStatus::Approved;
        match booking.status {
            BookingStatus::Pending => pending_bookings += 1,
            BookingStatus::Approved => approved_bookings += 1,
            BookingStatus::Rejected => rejected_bookings += 1,
        }

        if approved {
            total_revenue += booking.amount;
            match revenue_by_service
                .iter_mut()
                .find(|entry| entry.service == booking.service)
            {
                Some(entry) => {
                    entry.revenue += booking.amount;
                    entry.count += 1;
                }
                None => revenue_by_service.push(ServiceRevenue {
                    service: booking.service.clone(),
                    revenue: booking.amount,
                    count: 1,
                }),
            }
        }

        if booking.created_at >= window_start {
            let bucket = months
                .entry((booking.created_at.year(), booking.created_at.month()))
                .or_insert((0, 0));
            bucket.0 += 1;
            if approved {
                bucket.1 += booking.amount;
            }
        }
    }

    let bookings_by_month = months
        .into_iter()
        .map(|((year, month), (count, revenue))| MonthlyBookings {
            month: month_label(year, month),
            count,
            revenue,
        })
        .collect();

    DashboardStats {
        total_bookings: bookings.len() as u64,
        total_services,
        total_events,
        total_products,
        pending_bookings,
        approved_bookings,
        rejected_bookings,
        total_clients: clients.len() as u64,
        total_revenue,
        revenue_by_service,
        bookings_by_month,
        recent_bookings: bookings.iter().take(RECENT_LIMIT).cloned().collect(),
    }
}

/// Formats a month bucket as the chart label, e.g. "Jan 2026".
fn month_label(year: i32, month: u32) -> String {
    NaiveDate::from_ymd_opt(year, month, 1).map_or_else(
        || format!("{month} {year}"),
        |date| date.format("%b %Y").to_string(),
    )
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase};

    fn at(year: i32, month: u32, day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn booking_at(
        id: i64,
        email: &str,
        service: &str,
        status: BookingStatus,
        amount: i64,
        created_at: NaiveDateTime,
    ) -> booking::Model {
        booking::Model {
            id,
            client_name: format!("Client {id}"),
            email: email.to_string(),
            phone: "+254 700 000000".to_string(),
            service: service.to_string(),
            date: created_at.date(),
            status,
            notes: None,
            amount,
            created_at,
            updated_at: created_at,
        }
    }

    #[test]
    fn test_counts_by_status() {
        let now = at(2026, 7, 15);
        let bookings = vec![
            booking_at(3, "a@x.com", "Web", BookingStatus::Pending, 100, at(2026, 7, 3)),
            booking_at(2, "b@x.com", "Web", BookingStatus::Approved, 200, at(2026, 7, 2)),
            booking_at(1, "c@x.com", "Web", BookingStatus::Rejected, 300, at(2026, 7, 1)),
        ];

        let stats = aggregate(&bookings, 4, 2, 7, now);

        assert_eq!(stats.total_bookings, 3);
        assert_eq!(stats.pending_bookings, 1);
        assert_eq!(stats.approved_bookings, 1);
        assert_eq!(stats.rejected_bookings, 1);
        assert_eq!(stats.total_services, 4);
        assert_eq!(stats.total_events, 2);
        assert_eq!(stats.total_products, 7);
    }

    #[test]
    fn test_revenue_counts_only_approved() {
        let now = at(2026, 7, 15);
        let bookings = vec![
            booking_at(3, "a@x.com", "Web", BookingStatus::Pending, 70000, at(2026, 7, 3)),
            booking_at(2, "b@x.com", "Web", BookingStatus::Approved, 50000, at(2026, 7, 2)),
            booking_at(1, "c@x.com", "Web", BookingStatus::Rejected, 30000, at(2026, 7, 1)),
        ];

        let stats = aggregate(&bookings, 0, 0, 0, now);

        assert_eq!(stats.total_revenue, 50000);
    }

    #[test]
    fn test_total_clients_counts_distinct_emails() {
        let now = at(2026, 7, 15);
        let bookings = vec![
            booking_at(3, "repeat@x.com", "Web", BookingStatus::Pending, 100, at(2026, 7, 3)),
            booking_at(2, "repeat@x.com", "Design", BookingStatus::Approved, 200, at(2026, 7, 2)),
            booking_at(1, "other@x.com", "Web", BookingStatus::Rejected, 300, at(2026, 7, 1)),
        ];

        let stats = aggregate(&bookings, 0, 0, 0, now);

        assert_eq!(stats.total_clients, 2);
    }

    #[test]
    fn test_revenue_by_service_groups_in_first_seen_order() {
        let now = at(2026, 7, 15);
        let bookings = vec![
            booking_at(4, "a@x.com", "Web Development", BookingStatus::Approved, 10000, at(2026, 7, 4)),
            booking_at(3, "b@x.com", "UI/UX Design", BookingStatus::Approved, 5000, at(2026, 7, 3)),
            booking_at(2, "c@x.com", "Web Development", BookingStatus::Approved, 20000, at(2026, 7, 2)),
            // Pending bookings never contribute revenue, even for a known service
            booking_at(1, "d@x.com", "Web Development", BookingStatus::Pending, 99999, at(2026, 7, 1)),
        ];

        let stats = aggregate(&bookings, 0, 0, 0, now);

        assert_eq!(
            stats.revenue_by_service,
            vec![
                ServiceRevenue {
                    service: "Web Development".to_string(),
                    revenue: 30000,
                    count: 2,
                },
                ServiceRevenue {
                    service: "UI/UX Design".to_string(),
                    revenue: 5000,
                    count: 1,
                },
            ]
        );
    }

    #[test]
    fn test_month_window_boundary_is_inclusive() {
        let now = at(2026, 7, 15);
        // Exactly six calendar months before `now`
        let boundary = at(2026, 1, 15);
        let just_outside = boundary - chrono::Duration::seconds(1);

        let bookings = vec![
            booking_at(2, "a@x.com", "Web", BookingStatus::Approved, 1000, boundary),
            booking_at(1, "b@x.com", "Web", BookingStatus::Approved, 2000, just_outside),
        ];

        let stats = aggregate(&bookings, 0, 0, 0, now);

        assert_eq!(stats.bookings_by_month.len(), 1);
        assert_eq!(stats.bookings_by_month[0].month, "Jan 2026");
        assert_eq!(stats.bookings_by_month[0].count, 1);
        assert_eq!(stats.bookings_by_month[0].revenue, 1000);
        // The excluded booking still counts everywhere else
        assert_eq!(stats.total_bookings, 2);
        assert_eq!(stats.total_revenue, 3000);
    }

    #[test]
    fn test_months_sort_chronologically_across_years() {
        let now = at(2026, 3, 10);
        let bookings = vec![
            booking_at(2, "a@x.com", "Web", BookingStatus::Pending, 0, at(2026, 2, 5)),
            booking_at(1, "b@x.com", "Web", BookingStatus::Pending, 0, at(2025, 11, 20)),
        ];

        let stats = aggregate(&bookings, 0, 0, 0, now);

        // Alphabetical label ordering would put "Feb 2026" before "Nov 2025"
        let labels: Vec<&str> = stats
            .bookings_by_month
            .iter()
            .map(|m| m.month.as_str())
            .collect();
        assert_eq!(labels, vec!["Nov 2025", "Feb 2026"]);
    }

    #[test]
    fn test_monthly_bucket_counts_all_but_sums_approved_only() {
        let now = at(2026, 7, 15);
        let bookings = vec![
            booking_at(2, "a@x.com", "Web", BookingStatus::Approved, 10000, at(2026, 6, 10)),
            booking_at(1, "b@x.com", "Web", BookingStatus::Pending, 99000, at(2026, 6, 12)),
        ];

        let stats = aggregate(&bookings, 0, 0, 0, now);

        assert_eq!(stats.bookings_by_month.len(), 1);
        assert_eq!(stats.bookings_by_month[0].count, 2);
        assert_eq!(stats.bookings_by_month[0].revenue, 10000);
    }

    #[test]
    fn test_recent_bookings_are_first_five() {
        let now = at(2026, 7, 15);
        let bookings: Vec<booking::Model> = (0..7)
            .map(|i| {
                booking_at(
                    7 - i,
                    "a@x.com",
                    "Web",
                    BookingStatus::Pending,
                    100,
                    at(2026, 7, 14) - chrono::Duration::hours(i),
                )
            })
            .collect();

        let stats = aggregate(&bookings, 0, 0, 0, now);

        let ids: Vec<i64> = stats.recent_bookings.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![7, 6, 5, 4, 3]);
    }

    #[test]
    fn test_month_label_format() {
        assert_eq!(month_label(2026, 1), "Jan 2026");
        assert_eq!(month_label(2025, 12), "Dec 2025");
    }

    #[test]
    fn test_stats_serialize_camel_case() {
        let now = at(2026, 7, 15);
        let bookings = vec![booking_at(
            1,
            "a@x.com",
            "Web",
            BookingStatus::Approved,
            1000,
            at(2026, 7, 1),
        )];

        let stats = aggregate(&bookings, 1, 1, 1, now);
        let value = serde_json::to_value(&stats).unwrap();

        assert!(value.get("totalRevenue").is_some());
        assert!(value.get("revenueByService").is_some());
        assert!(value.get("bookingsByMonth").is_some());
        assert!(value.get("recentBookings").is_some());
        assert!(value["recentBookings"][0].get("clientName").is_some());
    }

    #[tokio::test]
    async fn test_compute_dashboard_stats_end_to_end() -> Result<()> {
        let db = setup_test_db().await?;

        let first = create_test_booking(&db, "jane@x.com", "Web Development", 50000).await?;
        crate::core::booking::decide_booking(
            &db,
            first.id,
            crate::core::booking::BookingDecision::Approved,
        )
        .await?;
        create_test_booking(&db, "nia@x.com", "UI/UX Design", 30000).await?;

        let stats = compute_dashboard_stats(&db).await?;

        assert_eq!(stats.total_bookings, 2);
        assert_eq!(stats.pending_bookings, 1);
        assert_eq!(stats.approved_bookings, 1);
        assert_eq!(stats.total_clients, 2);
        assert_eq!(stats.total_revenue, 50000);
        assert_eq!(stats.revenue_by_service.len(), 1);
        assert_eq!(stats.revenue_by_service[0].service, "Web Development");
        assert!(stats.recent_bookings.len() <= 2);

        Ok(())
    }

    #[tokio::test]
    async fn test_recompute_is_idempotent() -> Result<()> {
        let db = setup_test_db().await?;

        let booking = create_test_booking(&db, "jane@x.com", "Web Development", 50000).await?;
        crate::core::booking::decide_booking(
            &db,
            booking.id,
            crate::core::booking::BookingDecision::Approved,
        )
        .await?;

        let first = compute_dashboard_stats(&db).await?;
        let second = compute_dashboard_stats(&db).await?;

        assert_eq!(first, second);

        Ok(())
    }

    #[tokio::test]
    async fn test_failed_read_yields_aggregation_error() {
        let errors: Vec<DbErr> = (0..4)
            .map(|_| DbErr::Custom("read failed".to_string()))
            .collect();
        let db = MockDatabase::new(DatabaseBackend::Sqlite)
            .append_query_errors(errors)
            .into_connection();

        let result = compute_dashboard_stats(&db).await;

        assert!(matches!(
            result.unwrap_err(),
            Error::Aggregation { source: _ }
        ));
    }
}
