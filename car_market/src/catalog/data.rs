use super::types::{CarRecord, FeedListing};

const DEFAULT_CAR_IMAGE: &str = "car1.png";

/// How many feed listings the home carousel cycles through
pub const CAROUSEL_VISIBLE_ITEMS: usize = 3;

pub static HOME_FEED: [FeedListing; 6] = [
    FeedListing { id: 1, model: "Toyota Camry", price: "$15,000", image: "img1.png" },
    FeedListing { id: 2, model: "Honda Accord", price: "$13,800", image: "img2.png" },
    FeedListing { id: 3, model: "Nissan Altima", price: "$12,500", image: "img3.png" },
    FeedListing { id: 4, model: "Honda i20", price: "$10,500", image: "img4.png" },
    FeedListing { id: 5, model: "CyberTruck Tesla", price: "$15,800", image: "ing5.png" },
    FeedListing { id: 6, model: "Honda Civic", price: "$13,500", image: "ing6.png" },
];

/// Names offered by the search box. Not every name has a catalog entry.
pub static CAR_SUGGESTION_NAMES: [&str; 20] = [
    "Toyota Camry",
    "Honda Accord",
    "Ford Mustang",
    "Chevrolet Malibu",
    "BMW 3 Series",
    "Audi A4",
    "Mercedes-Benz C-Class",
    "Tesla Model 3",
    "Kia Optima",
    "Hyundai Elantra",
    "Nissan Altima",
    "Mazda 6",
    "Volkswagen Passat",
    "Subaru Legacy",
    "Lexus ES",
    "Dodge Charger",
    "Chrysler 300",
    "Infiniti Q50",
    "Acura TLX",
    "Jaguar XE",
];

pub static CARS: [CarRecord; 20] = [
    CarRecord {
        id: 1,
        model: "Toyota Camry",
        price: "$15,000",
        description: "A premium mid-size sedan offering smooth performance, modern features, and excellent fuel efficiency.",
        image: "img1.png",
    },
    CarRecord {
        id: 2,
        model: "Honda Accord",
        price: "$13,800",
        description: "A reliable and stylish sedan known for its spacious interior, smooth ride, and fuel economy.",
        image: "img2.png",
    },
    CarRecord {
        id: 3,
        model: "Nissan Altima",
        price: "$12,500",
        description: "A well-balanced sedan with a blend of comfort, safety, and tech features.",
        image: "img3.png",
    },
    CarRecord {
        id: 4,
        model: "Ford Mustang",
        price: "$27,000",
        description: "A legendary sports car delivering exhilarating power and iconic design.",
        image: DEFAULT_CAR_IMAGE,
    },
    CarRecord {
        id: 5,
        model: "Chevrolet Malibu",
        price: "$14,700",
        description: "A sleek and modern sedan offering comfort and high-tech connectivity.",
        image: DEFAULT_CAR_IMAGE,
    },
    CarRecord {
        id: 6,
        model: "BMW 3 Series",
        price: "$33,500",
        description: "A luxury sedan that balances performance, innovation, and elegance.",
        image: DEFAULT_CAR_IMAGE,
    },
    CarRecord {
        id: 7,
        model: "Audi A4",
        price: "$34,000",
        description: "An upscale and athletic sedan with intuitive tech and refined design.",
        image: DEFAULT_CAR_IMAGE,
    },
    CarRecord {
        id: 8,
        model: "Mercedes-Benz C-Class",
        price: "$36,500",
        description: "A classy and tech-forward sedan offering unmatched sophistication.",
        image: DEFAULT_CAR_IMAGE,
    },
    CarRecord {
        id: 9,
        model: "Tesla Model 3",
        price: "$39,000",
        description: "A revolutionary electric sedan with cutting-edge autopilot and fast acceleration.",
        image: DEFAULT_CAR_IMAGE,
    },
    CarRecord {
        id: 10,
        model: "Kia Optima",
        price: "$13,300",
        description: "A dependable family sedan with sporty looks and practical features.",
        image: DEFAULT_CAR_IMAGE,
    },
    CarRecord {
        id: 11,
        model: "Hyundai Elantra",
        price: "$11,900",
        description: "A compact and efficient sedan ideal for everyday commuting.",
        image: DEFAULT_CAR_IMAGE,
    },
    CarRecord {
        id: 12,
        model: "Mazda 6",
        price: "$16,000",
        description: "A stylish and fun-to-drive sedan with a premium interior.",
        image: DEFAULT_CAR_IMAGE,
    },
    CarRecord {
        id: 13,
        model: "Volkswagen Passat",
        price: "$14,300",
        description: "A European-style sedan that offers space and ride comfort.",
        image: DEFAULT_CAR_IMAGE,
    },
    CarRecord {
        id: 14,
        model: "Subaru Legacy",
        price: "$13,900",
        description: "A safe and all-weather capable sedan with AWD standard.",
        image: DEFAULT_CAR_IMAGE,
    },
    CarRecord {
        id: 15,
        model: "Lexus ES",
        price: "$39,500",
        description: "A refined and quiet luxury sedan with elegant styling.",
        image: DEFAULT_CAR_IMAGE,
    },
    CarRecord {
        id: 16,
        model: "Dodge Charger",
        price: "$29,000",
        description: "A bold and powerful sedan with muscle-car DNA.",
        image: DEFAULT_CAR_IMAGE,
    },
    CarRecord {
        id: 17,
        model: "Chrysler 300",
        price: "$28,700",
        description: "A full-size sedan with timeless style and strong presence.",
        image: DEFAULT_CAR_IMAGE,
    },
    CarRecord {
        id: 18,
        model: "Infiniti Q50",
        price: "$35,500",
        description: "A luxurious and high-performance sedan from Nissan’s premium brand.",
        image: DEFAULT_CAR_IMAGE,
    },
    CarRecord {
        id: 19,
        model: "Acura TLX",
        price: "$34,200",
        description: "A sporty luxury sedan that delivers precision and flair.",
        image: DEFAULT_CAR_IMAGE,
    },
    CarRecord {
        id: 20,
        model: "Jaguar XE",
        price: "$38,000",
        description: "A dynamic and agile British sedan with premium appeal.",
        image: DEFAULT_CAR_IMAGE,
    },
];
