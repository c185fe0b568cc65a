use std::fmt;

/// A single star from the HabHYG catalog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Star {
    pub habhyg: u64,
    pub display_name: String,
    pub habitable: bool,
    pub spectral_class: String,
    pub distance_parsecs: Option<f64>,
    pub magnitude: Option<f64>,
}

impl fmt::Display for Star {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "display_name={}, magnitude=", self.display_name)?;
        match self.magnitude {
            Some(magnitude) => writeln!(f, "{}", magnitude)?,
            None => writeln!(f, "unknown")?,
        }
        write!(
            f,
            "habhyg={}, spectral={}, habitable={}",
            self.habhyg,
            self.spectral_class,
            if self.habitable { 1 } else { 0 },
        )
    }
}
