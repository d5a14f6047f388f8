use std::env;
use std::error::Error;

use chrono::NaiveDate;
use env_logger::Env;

use staybook::models::reservation::MealPlan;
use staybook::services::api_client::BookingApiClient;
use staybook::services::browser_service::CityBrowser;
use staybook::services::inventory_service::RoomInventory;
use staybook::services::reservation_service::{DateField, ReservationComposer};

/// Scripted walk through the booking flow: cities, destinations and hotels
/// for one city, that hotel's rooms by floor, and an advance quote for the
/// first available room. Selections are steered by environment variables
/// (CITY_NAME, HOTEL_ID, CHECK_IN, CHECK_OUT, MEAL_PLAN) and default to the
/// first entry at each step.
#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    }
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let client = BookingApiClient::from_env()?;
    println!("Browsing catalog at {}", client.base_url());

    let mut browser = CityBrowser::new(client.clone());
    browser.load_cities().await?;
    if browser.cities().is_empty() {
        println!("The catalog has no cities; nothing to browse.");
        return Ok(());
    }

    let city_index = match env::var("CITY_NAME") {
        Ok(name) => browser
            .cities()
            .iter()
            .position(|entry| entry.display_name().eq_ignore_ascii_case(&name))
            .ok_or_else(|| format!("no city named {:?} in the catalog", name))?,
        Err(_) => 0,
    };
    browser.select_entry(city_index).await?;

    let city_name = browser
        .selected_city()
        .map(|city| city.name.clone())
        .unwrap_or_default();
    println!(
        "{}: {} popular destinations, {} hotels",
        city_name,
        browser.destinations().len(),
        browser.hotels().len()
    );
    for destination in browser.destinations() {
        println!("  destination: {} ({} images)", destination.name, destination.images.len());
    }

    let hotel = match env::var("HOTEL_ID").ok().and_then(|id| id.parse::<i64>().ok()) {
        Some(id) => browser
            .hotels()
            .iter()
            .find(|hotel| hotel.id == id)
            .cloned()
            .ok_or_else(|| format!("hotel {} is not listed for {}", id, city_name))?,
        None => match browser.hotels().first().cloned() {
            Some(hotel) => hotel,
            None => {
                println!("No hotels listed for {}; stopping.", city_name);
                return Ok(());
            }
        },
    };
    println!(
        "Hotel: {} ({}), {}, price range {}",
        hotel.name, hotel.owner_name, hotel.address, hotel.price_range
    );

    let inventory = RoomInventory::load(&client, hotel.id).await?;
    for floor in inventory.floors() {
        let rooms = inventory.floor_plan().rooms_on(*floor);
        println!("  floor {}: {} rooms", floor, rooms.len());
        for room in rooms {
            println!(
                "    room {} ({}) capacity {} price ₹{} {}",
                room.room_number,
                room.type_of_room,
                room.capacity,
                room.price,
                if room.is_available() { "available" } else { "booked" }
            );
        }
    }

    let (check_in, check_out) = match (env::var("CHECK_IN"), env::var("CHECK_OUT")) {
        (Ok(check_in), Ok(check_out)) => (
            NaiveDate::parse_from_str(&check_in, "%Y-%m-%d")?,
            NaiveDate::parse_from_str(&check_out, "%Y-%m-%d")?,
        ),
        _ => {
            println!("Set CHECK_IN and CHECK_OUT (YYYY-MM-DD) to quote an advance.");
            return Ok(());
        }
    };

    let room = inventory
        .floors()
        .iter()
        .flat_map(|floor| inventory.floor_plan().rooms_on(*floor))
        .find(|room| room.is_available())
        .cloned();
    let room = match room {
        Some(room) => room,
        None => {
            println!("No available rooms at {}; nothing to quote.", hotel.name);
            return Ok(());
        }
    };

    let mut composer = ReservationComposer::open(room)
        .expect("room was filtered for availability");
    composer.show_picker(DateField::CheckIn);
    composer.pick_date(check_in);
    composer.show_picker(DateField::CheckOut);
    composer.pick_date(check_out);

    if let Ok(code) = env::var("MEAL_PLAN") {
        match MealPlan::from_code(&code) {
            Some(plan) => composer.choose_meal_plan(plan),
            None => eprintln!("Unknown meal plan {:?}, keeping {}", code, composer.meal_plan().code()),
        }
    }

    if let Some(quote) = composer.advance_quote() {
        if quote.reversed_dates {
            eprintln!("Check-out is before check-in; the quote uses the absolute stay length.");
        }
        println!(
            "Room {} for {} nights, meal plan {}: advance ₹{} (25%)",
            composer.room().room_number,
            quote.nights,
            composer.meal_plan().code(),
            quote.formatted_amount()
        );
    }

    Ok(())
}
