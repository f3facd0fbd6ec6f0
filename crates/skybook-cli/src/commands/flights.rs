//! Flight commands - search and detail

use anyhow::Result;
use skybook_core::{Flight, FlightQuery, Operation};
use skybook_gateway::Gateway;

use super::{expect_payload, unexpected};
use crate::output::{format_price, FlightRow, OutputContext};

impl From<Flight> for FlightRow {
    fn from(f: Flight) -> Self {
        Self {
            id: f.id,
            flight_number: f.flight_number,
            airline: f.airline,
            route: format!("{} → {}", f.departure_city, f.arrival_city),
            date: f.departure_date,
            time: format!("{}-{}", f.departure_time, f.arrival_time),
            seats: f.available_seats,
            price: format_price(f.price),
        }
    }
}

/// Search flights
pub async fn flights(gateway: &Gateway, query: FlightQuery, ctx: &OutputContext) -> Result<()> {
    let payload = expect_payload(gateway.dispatch(&Operation::ListFlights(query)).await)?;
    let flights = payload.into_flights().ok_or_else(|| unexpected("flight list"))?;

    if flights.is_empty() {
        ctx.info("No flights found");
        return Ok(());
    }

    let rows: Vec<FlightRow> = flights.into_iter().map(FlightRow::from).collect();
    ctx.print(&rows);
    Ok(())
}

/// Show one flight
pub async fn flight(gateway: &Gateway, id: i64, ctx: &OutputContext) -> Result<()> {
    let payload = expect_payload(gateway.dispatch(&Operation::GetFlight(id)).await)?;
    let f = payload.into_flight().ok_or_else(|| unexpected("flight"))?;

    let pairs = vec![
        ("ID", f.id.to_string()),
        ("Flight", f.flight_number),
        ("Airline", f.airline),
        ("From", f.departure_city),
        ("To", f.arrival_city),
        ("Date", f.departure_date),
        ("Departs", f.departure_time),
        ("Arrives", f.arrival_time),
        ("Duration", f.duration),
        ("Aircraft", f.aircraft_type),
        ("Seats", f.available_seats.to_string()),
        ("Price", format_price(f.price)),
    ];

    ctx.print_kv(&pairs);
    Ok(())
}
