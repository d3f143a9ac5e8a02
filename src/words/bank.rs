//! Bundled fallback word banks.
//!
//! The game must stay fully playable offline, so every supported
//! language/category pair has a curated list here. Entries are widely
//! known terms; duel rounds draw their related pair from within a
//! single category.

use crate::types::{Category, Language};

/// Curated terms for the given language/category pair.
pub(crate) fn entries(language: Language, category: Category) -> &'static [&'static str] {
    match language {
        Language::En => english(category),
        Language::Es => spanish(category),
    }
}

fn english(category: Category) -> &'static [&'static str] {
    match category {
        Category::Famous => FAMOUS_EN,
        Category::Animals => ANIMALS_EN,
        Category::Food => FOOD_EN,
        Category::Movies => MOVIES_EN,
        Category::Cities => CITIES_EN,
        Category::Objects => OBJECTS_EN,
        Category::Jobs => JOBS_EN,
        Category::Sports => SPORTS_EN,
        Category::Clothing => CLOTHING_EN,
        Category::Countries => COUNTRIES_EN,
        Category::Brands => BRANDS_EN,
        Category::Cartoons => CARTOONS_EN,
        Category::Instruments => INSTRUMENTS_EN,
        Category::Songs => SONGS_EN,
    }
}

fn spanish(category: Category) -> &'static [&'static str] {
    match category {
        Category::Famous => FAMOUS_ES,
        Category::Animals => ANIMALS_ES,
        Category::Food => FOOD_ES,
        Category::Movies => MOVIES_ES,
        Category::Cities => CITIES_ES,
        Category::Objects => OBJECTS_ES,
        Category::Jobs => JOBS_ES,
        Category::Sports => SPORTS_ES,
        Category::Clothing => CLOTHING_ES,
        Category::Countries => COUNTRIES_ES,
        Category::Brands => BRANDS_ES,
        Category::Cartoons => CARTOONS_ES,
        Category::Instruments => INSTRUMENTS_ES,
        Category::Songs => SONGS_ES,
    }
}

const FAMOUS_EN: &[&str] = &[
    "Lionel Messi",
    "Cristiano Ronaldo",
    "Michael Jackson",
    "Albert Einstein",
    "Taylor Swift",
    "Harry Potter",
    "Batman",
    "Spider-Man",
    "Barack Obama",
    "Shakira",
    "Beyoncé",
    "Elon Musk",
    "Marilyn Monroe",
    "Pablo Picasso",
    "Frida Kahlo",
    "Diego Maradona",
    "Pelé",
    "Michael Jordan",
    "Leonardo da Vinci",
    "Cleopatra",
    "Julius Caesar",
    "William Shakespeare",
    "Napoleon Bonaparte",
    "Mahatma Gandhi",
    "Queen Elizabeth II",
    "Tom Cruise",
    "Will Smith",
    "Brad Pitt",
    "Angelina Jolie",
    "Dwayne Johnson",
    "Steve Jobs",
    "Bill Gates",
    "Oprah Winfrey",
    "Walt Disney",
    "Elvis Presley",
    "Madonna",
    "Freddie Mercury",
    "Bob Marley",
    "Vincent van Gogh",
    "Isaac Newton",
    "Charles Darwin",
    "Neil Armstrong",
    "Darth Vader",
    "James Bond",
    "Sherlock Holmes",
    "Wonder Woman",
    "Superman",
    "Iron Man",
    "Mickey Mouse",
    "Pikachu",
];

const FAMOUS_ES: &[&str] = &[
    "Lionel Messi",
    "Diego Maradona",
    "Shakira",
    "Bad Bunny",
    "Frida Kahlo",
    "Pablo Picasso",
    "Salvador Dalí",
    "Gabriel García Márquez",
    "Penélope Cruz",
    "Antonio Banderas",
    "Rafael Nadal",
    "Cristiano Ronaldo",
    "Albert Einstein",
    "Michael Jackson",
    "Harry Potter",
    "Batman",
    "Don Quijote",
    "El Zorro",
    "Celia Cruz",
    "Juan Gabriel",
    "Cantinflas",
    "Simón Bolívar",
    "Evita Perón",
    "Pelé",
    "Superman",
    "Mickey Mouse",
];

const ANIMALS_EN: &[&str] = &[
    "Elephant", "Giraffe", "Penguin", "Dolphin", "Kangaroo", "Octopus",
    "Crocodile", "Flamingo", "Hedgehog", "Panda", "Koala", "Shark",
    "Eagle", "Butterfly", "Camel", "Wolf",
];

const ANIMALS_ES: &[&str] = &[
    "Elefante", "Jirafa", "Pingüino", "Delfín", "Canguro", "Pulpo",
    "Cocodrilo", "Flamenco", "Erizo", "Oso panda", "Koala", "Tiburón",
    "Águila", "Mariposa", "Camello", "Lobo",
];

const FOOD_EN: &[&str] = &[
    "Pizza", "Sushi", "Hamburger", "Tacos", "Spaghetti", "Pancakes",
    "Croissant", "Ice cream", "Paella", "Hot dog", "Popcorn", "Cheesecake",
    "Ramen", "Guacamole", "Lasagna", "Donut",
];

const FOOD_ES: &[&str] = &[
    "Pizza", "Sushi", "Hamburguesa", "Tacos", "Espaguetis", "Tortitas",
    "Cruasán", "Helado", "Paella", "Perrito caliente", "Palomitas",
    "Tarta de queso", "Ramen", "Guacamole", "Lasaña", "Churros",
];

const MOVIES_EN: &[&str] = &[
    "Titanic", "The Lion King", "Star Wars", "Jurassic Park", "Frozen",
    "The Godfather", "Avatar", "Jaws", "Toy Story", "The Matrix",
    "Harry Potter", "Finding Nemo", "Rocky", "Shrek", "Gladiator", "Up",
];

const MOVIES_ES: &[&str] = &[
    "Titanic", "El Rey León", "Star Wars", "Parque Jurásico", "Frozen",
    "El Padrino", "Avatar", "Tiburón", "Toy Story", "Matrix",
    "Harry Potter", "Buscando a Nemo", "Rocky", "Shrek", "Gladiador", "Coco",
];

const CITIES_EN: &[&str] = &[
    "Paris", "New York", "Tokyo", "London", "Rome", "Barcelona",
    "Cairo", "Rio de Janeiro", "Sydney", "Venice", "Amsterdam", "Dubai",
    "Istanbul", "Las Vegas", "Berlin", "Buenos Aires",
];

const CITIES_ES: &[&str] = &[
    "París", "Nueva York", "Tokio", "Londres", "Roma", "Barcelona",
    "El Cairo", "Río de Janeiro", "Sídney", "Venecia", "Ámsterdam",
    "Dubái", "Estambul", "Las Vegas", "Berlín", "Buenos Aires",
];

const OBJECTS_EN: &[&str] = &[
    "Umbrella", "Toothbrush", "Scissors", "Pillow", "Mirror", "Candle",
    "Backpack", "Keyboard", "Hammer", "Sunglasses", "Wallet", "Ladder",
    "Compass", "Telescope", "Matches", "Fork",
];

const OBJECTS_ES: &[&str] = &[
    "Paraguas", "Cepillo de dientes", "Tijeras", "Almohada", "Espejo",
    "Vela", "Mochila", "Teclado", "Martillo", "Gafas de sol", "Cartera",
    "Escalera", "Brújula", "Telescopio", "Cerillas", "Tenedor",
];

const JOBS_EN: &[&str] = &[
    "Firefighter", "Surgeon", "Pilot", "Chef", "Astronaut", "Teacher",
    "Plumber", "Photographer", "Lawyer", "Barber", "Architect", "Farmer",
    "Dentist", "Magician", "Lifeguard", "Taxi driver",
];

const JOBS_ES: &[&str] = &[
    "Bombero", "Cirujano", "Piloto", "Cocinero", "Astronauta", "Profesor",
    "Fontanero", "Fotógrafo", "Abogado", "Peluquero", "Arquitecto",
    "Granjero", "Dentista", "Mago", "Socorrista", "Taxista",
];

const SPORTS_EN: &[&str] = &[
    "Soccer", "Basketball", "Tennis", "Swimming", "Boxing", "Golf",
    "Volleyball", "Surfing", "Skiing", "Cycling", "Baseball", "Karate",
    "Chess", "Archery", "Rugby", "Gymnastics",
];

const SPORTS_ES: &[&str] = &[
    "Fútbol", "Baloncesto", "Tenis", "Natación", "Boxeo", "Golf",
    "Voleibol", "Surf", "Esquí", "Ciclismo", "Béisbol", "Kárate",
    "Ajedrez", "Tiro con arco", "Rugby", "Gimnasia",
];

const CLOTHING_EN: &[&str] = &[
    "Scarf", "Sneakers", "Tuxedo", "Bikini", "Gloves", "Pajamas",
    "Raincoat", "High heels", "Baseball cap", "Jeans", "Tie", "Kimono",
    "Boots", "Hoodie", "Belt", "Socks",
];

const CLOTHING_ES: &[&str] = &[
    "Bufanda", "Zapatillas", "Esmoquin", "Bikini", "Guantes", "Pijama",
    "Chubasquero", "Tacones", "Gorra", "Vaqueros", "Corbata", "Kimono",
    "Botas", "Sudadera", "Cinturón", "Calcetines",
];

const COUNTRIES_EN: &[&str] = &[
    "Japan", "Brazil", "Egypt", "Australia", "Italy", "Mexico",
    "Canada", "India", "France", "Argentina", "Spain", "Iceland",
    "Morocco", "Greece", "China", "Germany",
];

const COUNTRIES_ES: &[&str] = &[
    "Japón", "Brasil", "Egipto", "Australia", "Italia", "México",
    "Canadá", "India", "Francia", "Argentina", "España", "Islandia",
    "Marruecos", "Grecia", "China", "Alemania",
];

const BRANDS_EN: &[&str] = &[
    "Coca-Cola", "Nike", "Apple", "McDonald's", "Lego", "Adidas",
    "Netflix", "Ikea", "Ferrari", "Disney", "Samsung", "Rolex",
    "Starbucks", "PlayStation", "Google", "Red Bull",
];

const BRANDS_ES: &[&str] = &[
    "Coca-Cola", "Nike", "Apple", "McDonald's", "Lego", "Adidas",
    "Netflix", "Ikea", "Ferrari", "Disney", "Samsung", "Rolex",
    "Starbucks", "PlayStation", "Google", "Zara",
];

const CARTOONS_EN: &[&str] = &[
    "SpongeBob SquarePants", "Homer Simpson", "Bugs Bunny", "Scooby-Doo",
    "Tom and Jerry", "Pikachu", "Goku", "Donald Duck", "Popeye",
    "Garfield", "Dora the Explorer", "Bart Simpson", "Winnie the Pooh",
    "Snoopy", "Mickey Mouse", "Doraemon",
];

const CARTOONS_ES: &[&str] = &[
    "Bob Esponja", "Homer Simpson", "Bugs Bunny", "Scooby-Doo",
    "Tom y Jerry", "Pikachu", "Goku", "Pato Donald", "Popeye",
    "Garfield", "Dora la Exploradora", "Bart Simpson", "Winnie the Pooh",
    "Snoopy", "Mickey Mouse", "Doraemon",
];

const INSTRUMENTS_EN: &[&str] = &[
    "Guitar", "Piano", "Violin", "Drums", "Trumpet", "Saxophone",
    "Flute", "Harp", "Accordion", "Bagpipes", "Cello", "Harmonica",
    "Ukulele", "Maracas", "Organ", "Tambourine",
];

const INSTRUMENTS_ES: &[&str] = &[
    "Guitarra", "Piano", "Violín", "Batería", "Trompeta", "Saxofón",
    "Flauta", "Arpa", "Acordeón", "Gaita", "Violonchelo", "Armónica",
    "Ukelele", "Maracas", "Órgano", "Pandereta",
];

const SONGS_EN: &[&str] = &[
    "Bohemian Rhapsody", "Thriller", "Imagine", "Billie Jean",
    "Shape of You", "Despacito", "Hey Jude", "Rolling in the Deep",
    "Smells Like Teen Spirit", "Dancing Queen", "Hotel California",
    "Like a Prayer", "Uptown Funk", "Let It Be", "Macarena", "Baby Shark",
];

const SONGS_ES: &[&str] = &[
    "Despacito", "La Macarena", "Bohemian Rhapsody", "Thriller",
    "La Bamba", "Vivir Mi Vida", "Color Esperanza", "Bailando",
    "Gasolina", "La Camisa Negra", "Livin' la Vida Loca", "Waka Waka",
    "Hips Don't Lie", "Imagine", "Billie Jean", "Danza Kuduro",
];
