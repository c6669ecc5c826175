//! The fixed set of people every fresh store starts with.

use person_store_types::Person;
use serde_json::Map;

struct SeedRow {
    id: &'static str,
    first_name: &'static str,
    last_name: &'static str,
    graduation_year: i64,
    address: &'static str,
    city: &'static str,
    zip: &'static str,
    avatar: &'static str,
}

const SEED: [SeedRow; 5] = [
    SeedRow {
        id: "3b58aade-8415-49dd-88db-8d7bce14932a",
        first_name: "Tanya",
        last_name: "Slad",
        graduation_year: 1996,
        address: "043 Heath Hill",
        city: "Dayton",
        zip: "45426",
        avatar: "http://dummyimage.com/139x100.png/cc0000/ffffff",
    },
    SeedRow {
        id: "d64efd92-ca8e-40da-b234-47e6403eb167",
        first_name: "Ferdy",
        last_name: "Garrow",
        graduation_year: 1970,
        address: "10 Wayridge Terrace",
        city: "North Little Rock",
        zip: "72199",
        avatar: "http://dummyimage.com/148x100.png/dddddd/000000",
    },
    SeedRow {
        id: "66c09925-589a-43b6-9a5d-d1601cf53287",
        first_name: "Lilla",
        last_name: "Aupol",
        graduation_year: 1985,
        address: "637 Carey Pass",
        city: "Gainesville",
        zip: "32627",
        avatar: "http://dummyimage.com/174x100.png/ff4444/ffffff",
    },
    SeedRow {
        id: "0dd63e57-0b5f-44bc-94ae-5c1b4947cb49",
        first_name: "Abdel",
        last_name: "Duke",
        graduation_year: 1995,
        address: "2 Lake View Point",
        city: "Shreveport",
        zip: "71105",
        avatar: "http://dummyimage.com/145x100.png/dddddd/000000",
    },
    SeedRow {
        id: "a3d8adba-4c20-495f-b4c4-f7de8b9cfb15",
        first_name: "Corby",
        last_name: "Tettley",
        graduation_year: 1984,
        address: "90329 Amoth Drive",
        city: "Boulder",
        zip: "80305",
        avatar: "http://dummyimage.com/198x100.png/cc0000/ffffff",
    },
];

/// All seed people live in the same country.
const SEED_COUNTRY: &str = "United States";

pub fn seed_people() -> Vec<Person> {
    SEED.iter()
        .map(|row| Person {
            id: row.id.to_string(),
            first_name: row.first_name.to_string(),
            last_name: row.last_name.to_string(),
            graduation_year: Some(row.graduation_year),
            address: Some(row.address.to_string()),
            city: Some(row.city.to_string()),
            zip: Some(row.zip.to_string()),
            country: Some(SEED_COUNTRY.to_string()),
            avatar: Some(row.avatar.to_string()),
            extra: Map::new(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_ids_are_unique() {
        let people = seed_people();
        let ids: HashSet<&str> = people.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(people.len(), 5);
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn test_seed_order() {
        let names: Vec<String> = seed_people().into_iter().map(|p| p.first_name).collect();
        assert_eq!(names, ["Tanya", "Ferdy", "Lilla", "Abdel", "Corby"]);
    }
}
