use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, collections::HashMap, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Province {
    Northern,
    NorthWestern,
    Western,
    NorthCentral,
    Central,
    Sabaragamuwa,
    Eastern,
    Uva,
    Southern,
}

impl Province {
    pub const ALL: [Province; 9] = [
        Province::Northern,
        Province::NorthWestern,
        Province::Western,
        Province::NorthCentral,
        Province::Central,
        Province::Sabaragamuwa,
        Province::Eastern,
        Province::Uva,
        Province::Southern,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            Province::Northern => "Northern Province",
            Province::NorthWestern => "North-Western Province",
            Province::Western => "Western Province",
            Province::NorthCentral => "North-Central Province",
            Province::Central => "Central Province",
            Province::Sabaragamuwa => "Sabaragamuwa Province",
            Province::Eastern => "Eastern Province",
            Province::Uva => "Uva Province",
            Province::Southern => "Southern Province",
        }
    }

    /// Districts of this province, in catalog order.
    pub fn districts(self) -> Vec<District> {
        District::ALL
            .iter()
            .copied()
            .filter(|district| district.province() == self)
            .collect()
    }
}

/// One of the 25 administrative districts. Ordering follows the textual
/// identifier so every ordered collection matches the emitted table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum District {
    Colombo,
    Gampaha,
    Kalutara,
    Kandy,
    Matale,
    NuwaraEliya,
    Galle,
    Matara,
    Hambantota,
    Jaffna,
    Kilinochchi,
    Mannar,
    Vavuniya,
    Mullaitivu,
    Batticaloa,
    Ampara,
    Trincomalee,
    Kurunegala,
    Puttalam,
    Anuradhapura,
    Polonnaruwa,
    Badulla,
    Monaragala,
    Ratnapura,
    Kegalle,
}

impl District {
    /// The catalog, in legacy scan order.
    pub const ALL: [District; 25] = [
        District::Colombo,
        District::Gampaha,
        District::Kalutara,
        District::Kandy,
        District::Matale,
        District::NuwaraEliya,
        District::Galle,
        District::Matara,
        District::Hambantota,
        District::Jaffna,
        District::Kilinochchi,
        District::Mannar,
        District::Vavuniya,
        District::Mullaitivu,
        District::Batticaloa,
        District::Ampara,
        District::Trincomalee,
        District::Kurunegala,
        District::Puttalam,
        District::Anuradhapura,
        District::Polonnaruwa,
        District::Badulla,
        District::Monaragala,
        District::Ratnapura,
        District::Kegalle,
    ];

    pub fn key(self) -> &'static str {
        match self {
            District::Colombo => "COLOMBO",
            District::Gampaha => "GAMPAHA",
            District::Kalutara => "KALUTARA",
            District::Kandy => "KANDY",
            District::Matale => "MATALE",
            District::NuwaraEliya => "NUWARA_ELIYA",
            District::Galle => "GALLE",
            District::Matara => "MATARA",
            District::Hambantota => "HAMBANTOTA",
            District::Jaffna => "JAFFNA",
            District::Kilinochchi => "KILINOCHCHI",
            District::Mannar => "MANNAR",
            District::Vavuniya => "VAVUNIYA",
            District::Mullaitivu => "MULLAITIVU",
            District::Batticaloa => "BATTICALOA",
            District::Ampara => "AMPARA",
            District::Trincomalee => "TRINCOMALEE",
            District::Kurunegala => "KURUNEGALA",
            District::Puttalam => "PUTTALAM",
            District::Anuradhapura => "ANURADHAPURA",
            District::Polonnaruwa => "POLONNARUWA",
            District::Badulla => "BADULLA",
            District::Monaragala => "MONARAGALA",
            District::Ratnapura => "RATNAPURA",
            District::Kegalle => "KEGALLE",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            District::Colombo => "Colombo",
            District::Gampaha => "Gampaha",
            District::Kalutara => "Kalutara",
            District::Kandy => "Kandy",
            District::Matale => "Matale",
            District::NuwaraEliya => "Nuwara Eliya",
            District::Galle => "Galle",
            District::Matara => "Matara",
            District::Hambantota => "Hambantota",
            District::Jaffna => "Jaffna",
            District::Kilinochchi => "Kilinochchi",
            District::Mannar => "Mannar",
            District::Vavuniya => "Vavuniya",
            District::Mullaitivu => "Mullaitivu",
            District::Batticaloa => "Batticaloa",
            District::Ampara => "Ampara",
            District::Trincomalee => "Trincomalee",
            District::Kurunegala => "Kurunegala",
            District::Puttalam => "Puttalam",
            District::Anuradhapura => "Anuradhapura",
            District::Polonnaruwa => "Polonnaruwa",
            District::Badulla => "Badulla",
            District::Monaragala => "Monaragala",
            District::Ratnapura => "Ratnapura",
            District::Kegalle => "Kegalle",
        }
    }

    /// Variable name the legacy map script assigns this district's path to.
    pub fn var_name(self) -> &'static str {
        match self {
            District::Colombo => "colombo",
            District::Gampaha => "gampaha",
            District::Kalutara => "kalutara",
            District::Kandy => "mahanuvara",
            District::Matale => "matale",
            District::NuwaraEliya => "nuwaraeliya",
            District::Galle => "galle",
            District::Matara => "matara",
            District::Hambantota => "hambantota",
            District::Jaffna => "jaffna",
            District::Kilinochchi => "kilinochchi",
            District::Mannar => "mannar",
            District::Vavuniya => "vavuniya",
            District::Mullaitivu => "mullaitivu",
            District::Batticaloa => "batticaloa",
            District::Ampara => "ampara",
            District::Trincomalee => "trincomalee",
            District::Kurunegala => "kurunegala",
            District::Puttalam => "puttalam",
            District::Anuradhapura => "anuradhapura",
            District::Polonnaruwa => "polonnaruwa",
            District::Badulla => "badulla",
            District::Monaragala => "moneragala",
            District::Ratnapura => "ratnapura",
            District::Kegalle => "kegalle",
        }
    }

    pub fn province(self) -> Province {
        match self {
            District::Jaffna
            | District::Kilinochchi
            | District::Mannar
            | District::Mullaitivu
            | District::Vavuniya => Province::Northern,
            District::Puttalam | District::Kurunegala => Province::NorthWestern,
            District::Gampaha | District::Colombo | District::Kalutara => Province::Western,
            District::Anuradhapura | District::Polonnaruwa => Province::NorthCentral,
            District::Matale | District::Kandy | District::NuwaraEliya => Province::Central,
            District::Kegalle | District::Ratnapura => Province::Sabaragamuwa,
            District::Trincomalee | District::Batticaloa | District::Ampara => Province::Eastern,
            District::Badulla | District::Monaragala => Province::Uva,
            District::Hambantota | District::Matara | District::Galle => Province::Southern,
        }
    }

    pub fn from_key(key: &str) -> Option<District> {
        KEY_DISTRICT_MAP.get(key).copied()
    }

    pub fn from_var_name(var_name: &str) -> Option<District> {
        VAR_DISTRICT_MAP.get(var_name).copied()
    }
}

impl PartialOrd for District {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for District {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(other.key())
    }
}

impl fmt::Display for District {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

static KEY_DISTRICT_MAP: Lazy<HashMap<&'static str, District>> =
    Lazy::new(|| District::ALL.iter().map(|d| (d.key(), *d)).collect());

static VAR_DISTRICT_MAP: Lazy<HashMap<&'static str, District>> =
    Lazy::new(|| District::ALL.iter().map(|d| (d.var_name(), *d)).collect());
