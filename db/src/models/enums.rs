use crate::utils::errors::EnumParseError;
use std::fmt;

macro_rules! string_enum {
    ($name:ident [$($value:ident),+]) => {

            #[derive(Clone, Copy, Serialize, Deserialize, PartialEq, Debug)]
            pub enum $name {
                $(
                    $value,
                )*
            }

            impl fmt::Display for $name {
                fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
                 let s = match self {
                      $(
                        $name::$value => stringify!($value),
                       )*
                    };
                    write!(f, "{}", s)
                }
            }

            impl $name {
                pub fn parse(s: &str) -> Result<$name, EnumParseError> {
                  match s {
                      $(
                        stringify!($value) => Ok($name::$value),
                       )*
                        _ => Err(EnumParseError {
                            message: "Could not parse value".to_string(),
                            enum_type: stringify!($name).to_string(),
                            value: s.to_string(),
                        })
                    }
                }

                pub fn values() -> Vec<&'static str> {
                    vec![$(stringify!($value),)*]
                }
            }
        }
}

string_enum! { UsState [AL, AK, AZ, AR, CA, CO, CT, DE, DC, FL, GA, HI, ID, IL, IN, IA, KS, KY, LA, ME, MD, MA, MI, MN, MS, MO, MT, NE, NV, NH, NJ, NM, NY, NC, ND, OH, OK, OR, PA, RI, SC, SD, TN, TX, UT, VT, VA, WA, WV, WI, WY] }

/// Genre choices offered on the venue and artist listing forms
pub const MUSIC_GENRES: &[&str] = &[
    "Alternative",
    "Blues",
    "Classical",
    "Country",
    "Electronic",
    "Folk",
    "Funk",
    "Hip-Hop",
    "Heavy Metal",
    "Instrumental",
    "Jazz",
    "Musical Theatre",
    "Pop",
    "Punk",
    "R&B",
    "Reggae",
    "Rock n Roll",
    "Soul",
    "Swing",
    "Other",
];
