//! Sample schools shown on the public listing page.
//!
//! The listing is a showcase and never touches the database; it renders the
//! fixed set returned by [`sample_schools`].

use serde::Serialize;

/// Highest star rating a card can show.
pub const MAX_RATING: u8 = 5;

/// A card on the listing page.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct SampleSchool {
    pub id: i32,
    pub name: &'static str,
    pub address: &'static str,
    pub city: &'static str,
    pub state: &'static str,
    pub image: &'static str,
    /// Star rating between 0 and [`MAX_RATING`].
    pub rating: Option<u8>,
    pub badge: Option<&'static str>,
}

impl SampleSchool {
    /// Case-insensitive substring match on name or city.
    ///
    /// `needle` must already be lower-cased.
    pub fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.city.to_lowercase().contains(needle)
    }
}

macro_rules! image_url {
    ($file:literal) => {
        concat!("https://uniformapp.in/admin_area/school_images/", $file)
    };
}

macro_rules! sample {
    ($id:expr, $name:expr, $address:expr, $city:expr, $state:expr, $image:expr, $rating:expr, $badge:expr) => {
        SampleSchool {
            id: $id,
            name: $name,
            address: $address,
            city: $city,
            state: $state,
            image: $image,
            rating: $rating,
            badge: $badge,
        }
    };
}

/// The fixed showcase set, in display order.
pub fn sample_schools() -> Vec<SampleSchool> {
    vec![
        sample!(
            1,
            "La Martiniere College",
            "Hazratganj",
            "Lucknow",
            "Uttar Pradesh",
            image_url!("La_Martiniere_College_Lucknow_image1_7.jpeg"),
            Some(4),
            None
        ),
        sample!(
            2,
            "Jagran Public School",
            "Gomti Nagar",
            "Lucknow",
            "Uttar Pradesh",
            image_url!("Jagran_Public_School_Lucknow_image1_13.jpeg"),
            Some(4),
            None
        ),
        sample!(
            3,
            "Seth Anandram Jaipuria",
            "Gomti Nagar",
            "Lucknow",
            "Uttar Pradesh",
            image_url!("Seth_Anandram_Jaipuria_Lucknow_image1_18.jpeg"),
            Some(3),
            Some("Review Now!")
        ),
        sample!(
            4,
            "Lucknow Public School Vinamra Khand",
            "Gomti Nagar",
            "Lucknow",
            "Uttar Pradesh",
            image_url!("Lucknow_Public_School_Vinamra_Khand_Lucknow_image1_43.jpeg"),
            Some(4),
            None
        ),
        sample!(
            5,
            "Fortune World School",
            "Sector-105",
            "Noida",
            "Uttar Pradesh",
            image_url!("Fortune_World_School_Noida_image1_159.jpeg"),
            Some(4),
            None
        ),
        sample!(
            6,
            "Sapphire International School Noida",
            "Sector 70",
            "Noida",
            "Uttar Pradesh",
            image_url!("Sapphire_International_School_Noida_Noida_image1_193.jpeg"),
            Some(5),
            Some("Review Now!")
        ),
        sample!(
            7,
            "The Paras World School",
            "Sector 50",
            "Gurgaon",
            "Haryana",
            image_url!("The_Paras_World_School_Gurgaon_image1_316.jpeg"),
            Some(3),
            Some("Review Now!")
        ),
        sample!(
            8,
            "Pathways World School Aravali",
            "Sohna Road",
            "Gurgaon",
            "Haryana",
            image_url!("Pathways_World_School_Aravali_Gurgaon_image1_1206.jpeg"),
            Some(4),
            None
        ),
    ]
}
