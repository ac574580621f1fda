use std::collections::BTreeMap;

use chrono::NaiveDate;
use sea_orm::{ActiveEnum, DatabaseConnection};

use crate::{
    model::analytics::{AnalyticsSummaryDto, RevenuePointDto, ServiceCountDto, StatusCountDto},
    server::{
        data::{
            appointment::AppointmentRepository, invoice::InvoiceRepository,
            service_operation::ServiceOperationRepository,
        },
        error::Error,
    },
};

pub struct AnalyticsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AnalyticsService<'a> {
    /// Creates a new instance of [`AnalyticsService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Dashboard summary for `[from, to]` (inclusive dates): appointment
    /// counts by status, revenue per day from recorded payments, and the most
    /// frequently booked services.
    ///
    /// Rows are fetched by range and aggregated here rather than with
    /// DB-specific date functions, so the same code runs on the sqlite test
    /// backend and postgres in production.
    pub async fn summary(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<AnalyticsSummaryDto, Error> {
        let appointment_repository = AppointmentRepository::new(self.db);
        let invoice_repository = InvoiceRepository::new(self.db);
        let operation_repository = ServiceOperationRepository::new(self.db);

        let range_start = from
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| Error::InternalError("invalid analytics range start".to_string()))?;
        let range_end = to
            .succ_opt()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .ok_or_else(|| Error::InternalError("invalid analytics range end".to_string()))?;

        let appointments = appointment_repository
            .get_in_range(range_start, range_end)
            .await?;

        // Status breakdown
        let mut status_counts: BTreeMap<String, u64> = BTreeMap::new();
        for appointment in &appointments {
            *status_counts
                .entry(appointment.status.to_value())
                .or_insert(0) += 1;
        }
        let appointments_by_status = status_counts
            .into_iter()
            .map(|(status, count)| StatusCountDto { status, count })
            .collect();

        // Revenue by day
        let payments = invoice_repository
            .get_payments_in_range(range_start, range_end)
            .await?;
        let mut revenue: BTreeMap<NaiveDate, i64> = BTreeMap::new();
        for payment in &payments {
            *revenue.entry(payment.paid_at.date()).or_insert(0) += payment.amount_cents;
        }
        let revenue_by_day = revenue
            .into_iter()
            .map(|(date, revenue_cents)| RevenuePointDto {
                date,
                revenue_cents,
            })
            .collect();

        // Top services by booking count
        let appointment_ids: Vec<i32> = appointments.iter().map(|a| a.id).collect();
        let lines = appointment_repository
            .get_services_for_appointments(&appointment_ids)
            .await?;

        let mut service_counts: BTreeMap<i32, u64> = BTreeMap::new();
        for line in &lines {
            *service_counts.entry(line.service_operation_id).or_insert(0) += 1;
        }

        let service_ids: Vec<i32> = service_counts.keys().copied().collect();
        let operations = operation_repository.find_by_ids(&service_ids).await?;

        let mut top_services: Vec<ServiceCountDto> = service_counts
            .into_iter()
            .map(|(service_id, count)| {
                let name = operations
                    .iter()
                    .find(|op| op.id == service_id)
                    .map(|op| op.name.clone())
                    .unwrap_or_else(|| format!("Service #{}", service_id));

                ServiceCountDto {
                    service_id,
                    name,
                    count,
                }
            })
            .collect();
        top_services.sort_by(|a, b| b.count.cmp(&a.count).then(a.name.cmp(&b.name)));

        Ok(AnalyticsSummaryDto {
            from,
            to,
            appointments_by_status,
            revenue_by_day,
            top_services,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use curbside_test_utils::prelude::*;
    use entity::{appointment::AppointmentStatus, invoice::InvoiceStatus};

    use crate::server::service::analytics::AnalyticsService;

    #[tokio::test]
    /// Expect the summary to count statuses, bucket revenue by day, and rank services
    async fn test_summary() -> Result<(), TestError> {
        let test = test_setup_with_shop_tables!()?;
        let analytics_service = AnalyticsService::new(&test.state.db);

        let customer = test
            .shop()
            .insert_customer("Rosa", "Delgado", "5558675309")
            .await?;
        let vehicle = test
            .shop()
            .insert_vehicle(customer.id, 2017, "Honda", "Civic")
            .await?;
        let oil = test
            .shop()
            .insert_service_operation("Oil change", 8900, 45)
            .await?;

        let monday = NaiveDate::from_ymd_opt(2026, 3, 16)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();

        let completed = test
            .shop()
            .insert_appointment(
                customer.id,
                vehicle.id,
                monday,
                60,
                AppointmentStatus::Completed,
            )
            .await?;
        test.shop()
            .insert_appointment(
                customer.id,
                vehicle.id,
                monday + chrono::Duration::hours(3),
                60,
                AppointmentStatus::Scheduled,
            )
            .await?;
        test.shop()
            .insert_appointment_service(completed.id, oil.id, 8900, 45)
            .await?;

        let invoice = test
            .shop()
            .insert_invoice(completed.id, customer.id, InvoiceStatus::Paid)
            .await?;
        test.shop().insert_payment(invoice.id, 8900).await?;

        // Wide range covering both the fixed appointment dates and the
        // payment stamped "now" by the fixture
        let today = chrono::Utc::now().date_naive();
        let summary = analytics_service
            .summary(
                today.min(NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()),
                today.max(NaiveDate::from_ymd_opt(2026, 3, 31).unwrap()),
            )
            .await
            .unwrap();

        let completed_count = summary
            .appointments_by_status
            .iter()
            .find(|s| s.status == "COMPLETED")
            .map(|s| s.count);
        assert_eq!(completed_count, Some(1));

        let scheduled_count = summary
            .appointments_by_status
            .iter()
            .find(|s| s.status == "SCHEDULED")
            .map(|s| s.count);
        assert_eq!(scheduled_count, Some(1));

        let total_revenue: i64 = summary.revenue_by_day.iter().map(|p| p.revenue_cents).sum();
        assert_eq!(total_revenue, 8900);

        assert_eq!(summary.top_services.len(), 1);
        assert_eq!(summary.top_services[0].name, "Oil change");
        assert_eq!(summary.top_services[0].count, 1);

        Ok(())
    }

    #[tokio::test]
    /// Expect an empty range to produce an empty summary
    async fn test_summary_empty_range() -> Result<(), TestError> {
        let test = test_setup_with_shop_tables!()?;
        let analytics_service = AnalyticsService::new(&test.state.db);

        let summary = analytics_service
            .summary(
                NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
                NaiveDate::from_ymd_opt(2020, 1, 31).unwrap(),
            )
            .await
            .unwrap();

        assert!(summary.appointments_by_status.is_empty());
        assert!(summary.revenue_by_day.is_empty());
        assert!(summary.top_services.is_empty());

        Ok(())
    }
}
