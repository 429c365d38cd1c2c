//! Conversion from solver DTOs to domain types.

use tracing::debug;

use crate::domain::{Journey, JourneyStep, StopRef, TransferStep, TravelStep};

use super::error::InputError;
use super::types::{JourneyInput, WireCorridor, WireStep, WireTransferStep, WireTravelStep};

/// Convert solver output into a journey.
///
/// Fails only when there is nothing to render: no input at all, or input
/// without a step list. Everything inside the step list is accepted as-is;
/// missing names become empty strings and missing coordinates stay `None`.
pub fn convert_journey(input: Option<&JourneyInput>) -> Result<Journey, InputError> {
    let input = input.ok_or(InputError::MissingJourney)?;
    let wire_steps = input
        .detailed_journey
        .as_deref()
        .ok_or(InputError::MissingSteps)?;

    let steps = wire_steps
        .iter()
        .enumerate()
        .filter_map(|(index, step)| match step {
            WireStep::Travel(travel) => Some(JourneyStep::Travel(convert_travel(travel))),
            WireStep::Transfer(transfer) => {
                Some(JourneyStep::Transfer(convert_transfer(transfer)))
            }
            WireStep::Unknown => {
                debug!(index, "Skipping step with unknown type");
                None
            }
        })
        .collect();

    let path_coords = input.path_coords.clone().unwrap_or_default();

    Ok(Journey::new(steps, path_coords))
}

fn convert_travel(step: &WireTravelStep) -> TravelStep {
    TravelStep {
        from: StopRef::new(step.dari.clone().unwrap_or_default(), step.coords_dari),
        to: StopRef::new(step.ke.clone().unwrap_or_default(), step.coords_ke),
        corridor: corridor_name(step.koridor.as_ref()),
        passed_stops: step.melewati.clone().unwrap_or_default(),
    }
}

fn convert_transfer(step: &WireTransferStep) -> TransferStep {
    TransferStep {
        stop_name: step.halte.clone().unwrap_or_default(),
        coords: step.coords,
        from_corridor: corridor_name(step.dari_koridor.as_ref()),
        to_corridor: corridor_name(step.ke_koridor.as_ref()),
    }
}

fn corridor_name(corridor: Option<&WireCorridor>) -> String {
    corridor.map(ToString::to_string).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LonLat;

    fn parse(json: &str) -> JourneyInput {
        JourneyInput::from_json(json).unwrap()
    }

    #[test]
    fn missing_input() {
        assert!(matches!(
            convert_journey(None),
            Err(InputError::MissingJourney)
        ));
    }

    #[test]
    fn missing_steps() {
        let input = parse(r#"{"path_coords": [[1, 2]]}"#);
        assert!(matches!(
            convert_journey(Some(&input)),
            Err(InputError::MissingSteps)
        ));
    }

    #[test]
    fn empty_steps_are_valid() {
        let input = parse(r#"{"detailed_journey": []}"#);
        let journey = convert_journey(Some(&input)).unwrap();
        assert!(journey.steps().is_empty());
        assert!(journey.path_coords().is_empty());
    }

    #[test]
    fn converts_travel_step() {
        let input = parse(
            r#"{"detailed_journey": [{
                "type": "travel", "koridor": 1, "dari": "A", "ke": "B",
                "melewati": ["C"], "coords_dari": [10, 20], "coords_ke": null
            }]}"#,
        );
        let journey = convert_journey(Some(&input)).unwrap();
        let step = journey.steps()[0].as_travel().unwrap();

        assert_eq!(step.from, StopRef::new("A", Some(LonLat::new(10.0, 20.0))));
        assert_eq!(step.to, StopRef::new("B", None));
        assert_eq!(step.corridor, "1");
        assert_eq!(step.passed_stops, vec!["C".to_string()]);
    }

    #[test]
    fn converts_transfer_step() {
        let input = parse(
            r#"{"detailed_journey": [{
                "type": "transfer", "halte": "Dukuh Atas",
                "dari_koridor": "1", "ke_koridor": "6", "coords": [5, 6]
            }]}"#,
        );
        let journey = convert_journey(Some(&input)).unwrap();
        let step = journey.steps()[0].as_transfer().unwrap();

        assert_eq!(step.stop_name, "Dukuh Atas");
        assert_eq!(step.from_corridor, "1");
        assert_eq!(step.to_corridor, "6");
        assert_eq!(step.coords, Some(LonLat::new(5.0, 6.0)));
    }

    #[test]
    fn missing_fields_default() {
        let input = parse(r#"{"detailed_journey": [{"type": "travel"}, {"type": "transfer"}]}"#);
        let journey = convert_journey(Some(&input)).unwrap();

        let travel = journey.steps()[0].as_travel().unwrap();
        assert_eq!(travel.from.name, "");
        assert_eq!(travel.corridor, "");
        assert!(travel.passed_stops.is_empty());

        let transfer = journey.steps()[1].as_transfer().unwrap();
        assert_eq!(transfer.stop_name, "");
        assert!(transfer.coords.is_none());
    }

    #[test]
    fn unknown_steps_dropped() {
        let input = parse(
            r#"{"detailed_journey": [
                {"type": "walk"},
                {"type": "travel", "dari": "A", "ke": "B"}
            ]}"#,
        );
        let journey = convert_journey(Some(&input)).unwrap();
        assert_eq!(journey.steps().len(), 1);
    }

    #[test]
    fn path_coords_kept_in_order() {
        let input = parse(r#"{"detailed_journey": [], "path_coords": [[1, 2], [3, 4], [5, 6]]}"#);
        let journey = convert_journey(Some(&input)).unwrap();
        assert_eq!(
            journey.path_coords(),
            &[
                LonLat::new(1.0, 2.0),
                LonLat::new(3.0, 4.0),
                LonLat::new(5.0, 6.0)
            ]
        );
    }
}
