use actix_web::dev::ServerHandle;
use actix_web::{web, App, HttpResponse, HttpServer, Responder};
use serde_json::json;
use tokio::time::{sleep, Duration};

/// In-process stand-in for the booking catalog API, bound to an
/// OS-assigned port. City 1's popular-destinations endpoint responds
/// slowly so tests can race two selections.
pub struct StubApi {
    pub base_url: String,
    handle: ServerHandle,
}

impl StubApi {
    pub async fn stop(self) {
        self.handle.stop(false).await;
    }
}

pub async fn spawn_stub_api() -> StubApi {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind stub api listener");
    let addr = listener.local_addr().expect("stub api addr");

    let server = HttpServer::new(|| {
        App::new()
            .route("/api/cities/", web::get().to(cities))
            .route(
                "/api/cities/{city_id}/popular-destinations/",
                web::get().to(popular_destinations),
            )
            .route("/api/hotels/{city_id}", web::get().to(hotels))
            .route("/api/floor/rooms/{hotel_id}/", web::get().to(rooms))
    })
    .workers(1)
    .disable_signals()
    .listen(listener)
    .expect("listen on stub api socket")
    .run();

    let handle = server.handle();
    actix_rt::spawn(server);

    StubApi {
        base_url: format!("http://{}", addr),
        handle,
    }
}

async fn cities() -> impl Responder {
    HttpResponse::Ok().json(json!([
        { "id": 1, "name": "Agra", "lat": "27.1767", "long": "78.0081" },
        { "id": 2, "name": "Bhopal", "lat": "23.2599", "long": "77.4126" }
    ]))
}

async fn popular_destinations(path: web::Path<i64>) -> impl Responder {
    match path.into_inner() {
        1 => {
            // Slow city: lets a newer selection overtake this response.
            sleep(Duration::from_millis(200)).await;
            HttpResponse::Ok().json(json!([
                {
                    "id": 10,
                    "name": "Taj Mahal",
                    "images": [
                        { "id": 1, "image": "https://cdn.example.com/taj-1.jpg" },
                        { "id": 2, "image": "https://cdn.example.com/taj-2.jpg" },
                        { "id": 3, "image": "https://cdn.example.com/taj-3.jpg" }
                    ]
                }
            ]))
        }
        2 => HttpResponse::Ok().json(json!([
            {
                "id": 20,
                "name": "Upper Lake",
                "images": [
                    { "id": 4, "image": "https://cdn.example.com/lake-1.jpg" },
                    { "id": 5, "image": "https://cdn.example.com/lake-2.jpg" }
                ]
            },
            {
                "id": 21,
                "name": "Sanchi Stupa",
                "images": [
                    { "id": 6, "image": "https://cdn.example.com/sanchi-1.jpg" }
                ]
            }
        ])),
        _ => HttpResponse::NotFound().json(json!({ "detail": "Not found." })),
    }
}

async fn hotels(path: web::Path<i64>) -> impl Responder {
    match path.into_inner() {
        1 => HttpResponse::Ok().json(json!([
            {
                "id": 100,
                "name": "Mughal Gate Inn",
                "owner_name": "R. Sharma",
                "contact": "+91 90000 10001",
                "address": "5 Fort Rd, Agra",
                "amenities": "WiFi, Restaurant",
                "price_range": "1500-4000",
                "images": [ { "id": 7, "image": "https://cdn.example.com/mughal.jpg" } ]
            }
        ])),
        2 => HttpResponse::Ok().json(json!([
            {
                "id": 200,
                "name": "Lakeview Residency",
                "owner_name": "S. Mehta",
                "contact": "+91 90000 20002",
                "address": "12 Lake Rd, Bhopal",
                "amenities": "WiFi, Pool, Parking",
                "price_range": "2000-6000",
                "images": [ { "id": 8, "image": "https://cdn.example.com/lakeview.jpg" } ]
            }
        ])),
        // Malformed payload: an object where the client expects a list.
        3 => HttpResponse::Ok().json(json!({ "hotels": [] })),
        _ => HttpResponse::NotFound().json(json!({ "detail": "Not found." })),
    }
}

async fn rooms(path: web::Path<i64>) -> impl Responder {
    match path.into_inner() {
        200 => HttpResponse::Ok().json(json!([
            {
                "id": 1,
                "floor": 3,
                "room_number": "301",
                "type_of_room": "Suite",
                "capacity": 4,
                "price": 2500.0,
                "status": "No",
                "image": "https://cdn.example.com/room-301.jpg"
            },
            {
                "id": 2,
                "floor": 1,
                "room_number": "101",
                "type_of_room": "Standard",
                "capacity": 2,
                "price": 1000.0,
                "status": "Yes"
            },
            {
                "id": 3,
                "floor": 1,
                "room_number": "102",
                "type_of_room": "Standard",
                "capacity": 2,
                "price": 1000.0,
                "status": "No"
            },
            {
                "id": 4,
                "floor": 2,
                "room_number": "201",
                "type_of_room": "Deluxe",
                "capacity": 3,
                "price": 1800.0,
                "status": "Renovating"
            }
        ])),
        _ => HttpResponse::NotFound().json(json!({ "detail": "Not found." })),
    }
}
