//! City and destination browsing.
//!
//! Holds the city rail, the destination and hotel lists for the selected
//! city, and the destination image carousel. City selections are stamped
//! with a generation token so a slow response for a superseded selection is
//! discarded instead of overwriting the newer city's data.

use thiserror::Error;

use crate::models::city::{City, CityEntry};
use crate::models::destination::{CatalogImage, Destination};
use crate::models::hotel::Hotel;
use crate::services::api_client::{ApiError, BookingApiClient};
use crate::services::location_service::{LocationError, LocationProvider};

#[derive(Debug, Error)]
pub enum BrowseError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("the device-location entry has no catalog city to browse")]
    DeviceLocationNotBrowsable,
    #[error("no city entry at index {0}")]
    UnknownEntry(usize),
}

/// Zero-based cursor over an image list. Both directions clamp at the
/// bounds; there is no wraparound.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImageCarousel {
    index: usize,
    len: usize,
}

impl ImageCarousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn forward(&mut self) {
        if self.index + 1 < self.len {
            self.index += 1;
        }
    }

    pub fn backward(&mut self) {
        self.index = self.index.saturating_sub(1);
    }
}

/// Proof that a city selection was the latest one when its data arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionToken {
    generation: u64,
}

pub struct CityBrowser {
    client: BookingApiClient,
    cities: Vec<CityEntry>,
    selected_city: Option<City>,
    destinations: Vec<Destination>,
    hotels: Vec<Hotel>,
    selected_destination: Option<usize>,
    carousel: ImageCarousel,
    generation: u64,
}

impl CityBrowser {
    pub fn new(client: BookingApiClient) -> Self {
        Self {
            client,
            cities: Vec::new(),
            selected_city: None,
            destinations: Vec::new(),
            hotels: Vec::new(),
            selected_destination: None,
            carousel: ImageCarousel::default(),
            generation: 0,
        }
    }

    pub fn cities(&self) -> &[CityEntry] {
        &self.cities
    }

    pub fn selected_city(&self) -> Option<&City> {
        self.selected_city.as_ref()
    }

    pub fn destinations(&self) -> &[Destination] {
        &self.destinations
    }

    pub fn hotels(&self) -> &[Hotel] {
        &self.hotels
    }

    /// Fetch the city catalog. A device-location entry added earlier stays
    /// at the front of the rail.
    pub async fn load_cities(&mut self) -> Result<(), ApiError> {
        let cities = self.client.cities().await?;
        println!("Fetched {} cities", cities.len());

        let device = self
            .cities
            .iter()
            .find(|entry| entry.is_device_location())
            .cloned();
        self.cities = cities.into_iter().map(CityEntry::Catalog).collect();
        if let Some(device) = device {
            self.cities.insert(0, device);
        }
        Ok(())
    }

    /// Read the device position and prepend it to the city rail, replacing
    /// any previous device-location entry rather than accumulating
    /// duplicates.
    pub fn locate_me(&mut self, provider: &dyn LocationProvider) -> Result<(), LocationError> {
        let position = provider.current_position()?;
        self.cities.retain(|entry| !entry.is_device_location());
        self.cities.insert(
            0,
            CityEntry::DeviceLocation {
                lat: position.latitude,
                long: position.longitude,
            },
        );
        println!(
            "Added device position ({:.4}, {:.4}) to the city rail",
            position.latitude, position.longitude
        );
        Ok(())
    }

    /// Mark `city` as the active selection and take the token its data must
    /// present to be committed. Any token from an earlier selection is now
    /// stale.
    pub fn begin_city_selection(&mut self, city: &City) -> SelectionToken {
        self.generation += 1;
        self.selected_city = Some(city.clone());
        SelectionToken {
            generation: self.generation,
        }
    }

    /// Commit the destination and hotel lists for a selection. Returns
    /// false (leaving state untouched) when the token has been superseded
    /// by a newer selection.
    pub fn commit_city_data(
        &mut self,
        token: SelectionToken,
        destinations: Vec<Destination>,
        hotels: Vec<Hotel>,
    ) -> bool {
        if token.generation != self.generation {
            println!(
                "Discarding stale city data (generation {} superseded by {})",
                token.generation, self.generation
            );
            return false;
        }

        self.destinations = destinations;
        self.hotels = hotels;
        if self.destinations.is_empty() {
            self.selected_destination = None;
            self.carousel = ImageCarousel::default();
        } else {
            self.selected_destination = Some(0);
            self.carousel = ImageCarousel::new(self.destinations[0].images.len());
        }
        true
    }

    /// Select a catalog city: fetch its destinations and hotels together
    /// and commit both only when both succeed, so the two lists never
    /// disagree about which city they belong to.
    pub async fn select_city(&mut self, city: &City) -> Result<(), ApiError> {
        let token = self.begin_city_selection(city);
        let (destinations, hotels) = futures::try_join!(
            self.client.popular_destinations(city.id),
            self.client.hotels(city.id)
        )?;
        self.commit_city_data(token, destinations, hotels);
        Ok(())
    }

    /// Select a rail entry by position. Device-location entries are not
    /// browsable on the backend.
    pub async fn select_entry(&mut self, index: usize) -> Result<(), BrowseError> {
        let city = match self.cities.get(index) {
            None => return Err(BrowseError::UnknownEntry(index)),
            Some(CityEntry::DeviceLocation { .. }) => {
                return Err(BrowseError::DeviceLocationNotBrowsable)
            }
            Some(CityEntry::Catalog(city)) => city.clone(),
        };
        self.select_city(&city).await?;
        Ok(())
    }

    pub fn selected_destination(&self) -> Option<&Destination> {
        self.selected_destination
            .and_then(|index| self.destinations.get(index))
    }

    /// Switch the carousel to another destination; the image index resets
    /// to 0.
    pub fn select_destination(&mut self, index: usize) {
        if let Some(destination) = self.destinations.get(index) {
            self.carousel = ImageCarousel::new(destination.images.len());
            self.selected_destination = Some(index);
        }
    }

    pub fn image_index(&self) -> usize {
        self.carousel.index()
    }

    pub fn current_image(&self) -> Option<&CatalogImage> {
        self.selected_destination()
            .and_then(|destination| destination.images.get(self.carousel.index()))
    }

    pub fn next_image(&mut self) {
        self.carousel.forward();
    }

    pub fn previous_image(&mut self) {
        self.carousel.backward();
    }
}
