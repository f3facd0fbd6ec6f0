//! Booking commands - create and list

use anyhow::Result;
use skybook_core::{
    filter_by_status, Booking, BookingStatus, NewBooking, Operation, Passenger, StatusCounts,
};
use skybook_gateway::Gateway;

use super::{expect_payload, unexpected};
use crate::output::{format_price, BookingRow, OutputContext};

impl From<Booking> for BookingRow {
    fn from(b: Booking) -> Self {
        Self {
            id: b.id,
            flight_id: b.flight_id,
            passenger: b.passenger_name,
            seat: b.seat_number,
            booking_date: b.booking_date,
            status: b.status.to_string(),
            total: format_price(b.total_price),
        }
    }
}

/// Book a seat on a flight, quoting fare plus service fee
pub async fn book(
    gateway: &Gateway,
    flight_id: i64,
    passenger: Passenger,
    seat: &str,
    ctx: &OutputContext,
) -> Result<()> {
    let flight = expect_payload(gateway.dispatch(&Operation::GetFlight(flight_id)).await)?
        .into_flight()
        .ok_or_else(|| unexpected("flight"))?;

    let request = NewBooking::for_flight(&flight, passenger, seat);
    let booking = expect_payload(gateway.dispatch(&Operation::CreateBooking(request)).await)?
        .into_booking()
        .ok_or_else(|| unexpected("booking"))?;

    ctx.success(&format!("Booking confirmed! Booking code: {}", booking.id));
    ctx.print(&[BookingRow::from(booking)]);
    Ok(())
}

/// List bookings, optionally for one user and/or in one status
pub async fn bookings(
    gateway: &Gateway,
    user: Option<&str>,
    status: Option<BookingStatus>,
    ctx: &OutputContext,
) -> Result<()> {
    let operation = match user {
        Some(user_id) => Operation::ListUserBookings(user_id.to_string()),
        None => Operation::ListBookings,
    };
    let all = expect_payload(gateway.dispatch(&operation).await)?
        .into_bookings()
        .ok_or_else(|| unexpected("booking list"))?;

    let counts = StatusCounts::tally(&all);
    ctx.info(&format!(
        "All: {}  Confirmed: {}  Pending: {}  Cancelled: {}",
        counts.all, counts.confirmed, counts.pending, counts.cancelled
    ));

    let selected = filter_by_status(&all, status);
    if selected.is_empty() {
        ctx.info("No bookings found");
        return Ok(());
    }

    let rows: Vec<BookingRow> = selected.into_iter().map(BookingRow::from).collect();
    ctx.print(&rows);
    Ok(())
}
