use std::fmt;

use uom::si::{
    f64::{ThermodynamicTemperature, Volume},
    thermodynamic_temperature::degree_fahrenheit,
    volume::gallon,
};

use crate::models::hydronic::expansion_tank::{
    AshraeInput, CriticalInput, SystemVolume, TankPressures,
};
use crate::support::constraint::StrictlyPositive;

use super::{InputError, options};

/// A field on the sizing form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    SystemVolume,
    MinTankPressure,
    MaxTankPressure,
    AverageTemperature,
    InitialTemperature,
    MaxTemperature,
}

impl Field {
    /// All fields, in form order.
    pub const ALL: [Field; 6] = [
        Field::SystemVolume,
        Field::MinTankPressure,
        Field::MaxTankPressure,
        Field::AverageTemperature,
        Field::InitialTemperature,
        Field::MaxTemperature,
    ];

    /// The label shown next to the field.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Field::SystemVolume => "Total System Volume (gal)",
            Field::MinTankPressure => "Min Tank Pressure (psig)",
            Field::MaxTankPressure => "Max Tank Pressure (psig)",
            Field::AverageTemperature => "Average Operating Temp (°F)",
            Field::InitialTemperature => "Initial Water Temp (°F)",
            Field::MaxTemperature => "Max Water Temp (°F)",
        }
    }

    /// The listed choices for this field, or `None` for free entry.
    #[must_use]
    pub fn choices(self) -> Option<&'static [f64]> {
        match self {
            Field::SystemVolume => None,
            Field::MinTankPressure => Some(options::MIN_TANK_PRESSURES_PSIG),
            Field::MaxTankPressure => Some(options::MAX_TANK_PRESSURES_PSIG),
            Field::AverageTemperature => Some(options::AVERAGE_TEMPERATURES_F),
            Field::InitialTemperature => Some(options::INITIAL_WATER_TEMPERATURES_F),
            Field::MaxTemperature => Some(options::MAX_WATER_TEMPERATURES_F),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raw text of every field on the sizing form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub system_volume: String,
    pub min_tank_pressure: String,
    pub max_tank_pressure: String,
    pub average_temperature: String,
    pub initial_temperature: String,
    pub max_temperature: String,
}

impl FormFields {
    /// Returns the text of a field.
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::SystemVolume => &self.system_volume,
            Field::MinTankPressure => &self.min_tank_pressure,
            Field::MaxTankPressure => &self.max_tank_pressure,
            Field::AverageTemperature => &self.average_temperature,
            Field::InitialTemperature => &self.initial_temperature,
            Field::MaxTemperature => &self.max_temperature,
        }
    }

    /// Replaces the text of a field.
    pub fn set(&mut self, field: Field, text: impl Into<String>) {
        let slot = match field {
            Field::SystemVolume => &mut self.system_volume,
            Field::MinTankPressure => &mut self.min_tank_pressure,
            Field::MaxTankPressure => &mut self.max_tank_pressure,
            Field::AverageTemperature => &mut self.average_temperature,
            Field::InitialTemperature => &mut self.initial_temperature,
            Field::MaxTemperature => &mut self.max_temperature,
        };
        *slot = text.into();
    }

    fn number(&self, field: Field) -> Result<f64, InputError> {
        self.get(field)
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or(InputError::InvalidInput { field })
    }
}

/// A parsed sizing request, built fresh from the form for each calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizingRequest {
    pub system_volume: SystemVolume,
    pub pressures: TankPressures,

    /// Average operating temperature, used by the ASHRAE method.
    pub average_temperature: ThermodynamicTemperature,

    /// Fill temperature, used by the critical method.
    pub initial_temperature: ThermodynamicTemperature,

    /// Maximum operating temperature, used by the critical method.
    pub max_temperature: ThermodynamicTemperature,
}

impl SizingRequest {
    /// Parses every field on the form.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::InvalidInput`] naming the first field, in form
    /// order, that is not a finite number.
    /// A system volume that is not strictly positive is also invalid.
    pub fn parse(fields: &FormFields) -> Result<Self, InputError> {
        let system_volume = fields.number(Field::SystemVolume)?;
        let min_pressure = fields.number(Field::MinTankPressure)?;
        let max_pressure = fields.number(Field::MaxTankPressure)?;
        let average = fields.number(Field::AverageTemperature)?;
        let initial = fields.number(Field::InitialTemperature)?;
        let max = fields.number(Field::MaxTemperature)?;

        let system_volume = StrictlyPositive::new(Volume::new::<gallon>(system_volume))
            .map_err(|_| InputError::InvalidInput {
                field: Field::SystemVolume,
            })?;

        Ok(Self {
            system_volume,
            pressures: TankPressures::psig(min_pressure, max_pressure),
            average_temperature: fahrenheit(average),
            initial_temperature: fahrenheit(initial),
            max_temperature: fahrenheit(max),
        })
    }

    /// Inputs for the ASHRAE method.
    #[must_use]
    pub fn ashrae_input(&self) -> AshraeInput {
        AshraeInput {
            system_volume: self.system_volume,
            average_temperature: self.average_temperature,
            pressures: self.pressures,
        }
    }

    /// Inputs for the critical method.
    #[must_use]
    pub fn critical_input(&self) -> CriticalInput {
        CriticalInput {
            system_volume: self.system_volume,
            fill_temperature: self.initial_temperature,
            max_temperature: self.max_temperature,
            pressures: self.pressures,
        }
    }

    /// Returns the fields whose values are not among their listed choices.
    #[must_use]
    pub fn unlisted_choices(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|&field| {
                field
                    .choices()
                    .is_some_and(|choices| !options::is_listed(choices, self.value(field)))
            })
            .collect()
    }

    fn value(&self, field: Field) -> f64 {
        match field {
            Field::SystemVolume => self.system_volume.as_ref().get::<gallon>(),
            Field::MinTankPressure => self.pressures.minimum.get_psig(),
            Field::MaxTankPressure => self.pressures.maximum.get_psig(),
            Field::AverageTemperature => self.average_temperature.get::<degree_fahrenheit>(),
            Field::InitialTemperature => self.initial_temperature.get::<degree_fahrenheit>(),
            Field::MaxTemperature => self.max_temperature.get::<degree_fahrenheit>(),
        }
    }
}

fn fahrenheit(value: f64) -> ThermodynamicTemperature {
    ThermodynamicTemperature::new::<degree_fahrenheit>(value)
}
