//! Gate-list tokens.
//!
//! Tokens are catalog names (`h`, `inv-sqrt-x`), the pauses `i`, `wait` and
//! `no_wait`, or parameterized rotations separated by `;`:
//! `rx;0.5`, `rz;0.25;Phase`, `custom;0;1;1;0.5;U`. Angles are given as
//! multiples of π.

use std::f64::consts::PI;

use glam::DVec3;

use super::{catalog, Gate, Instruction};
use crate::error::BlochError;

const PARAM_SEPARATOR: char = ';';
const LIST_SEPARATOR: char = ',';

/// Parse one gate token.
pub fn parse_instruction(token: &str) -> Result<Instruction, BlochError> {
    let token = token.trim();
    let mut parts = token.split(PARAM_SEPARATOR);
    // Only the name is dash-normalized; parameters may be negative.
    let name = parts.next().unwrap_or_default().replace('-', "_");
    let params: Vec<&str> = parts.collect();

    let instruction = match name.as_str() {
        "rx" => Instruction::Gate(axis_rotation(token, 'x', &params)?),
        "ry" => Instruction::Gate(axis_rotation(token, 'y', &params)?),
        "rz" => Instruction::Gate(axis_rotation(token, 'z', &params)?),
        "custom" => Instruction::Gate(custom_rotation(token, &params)?),
        _ if !params.is_empty() => {
            return Err(if is_known(&name) {
                invalid(token, "only rx, ry, rz and custom take parameters")
            } else {
                BlochError::UnknownGate(name.clone())
            });
        }
        "i" => Instruction::Identity,
        "wait" => Instruction::Wait,
        "no_wait" => Instruction::NoWait,
        _ => catalog::lookup(&name)
            .map(Instruction::Gate)
            .ok_or_else(|| BlochError::UnknownGate(name.clone()))?,
    };
    Ok(instruction)
}

/// Parse a whole gate list before anything is rendered.
///
/// Each item may itself hold several comma-separated tokens, so both
/// `["h", "z", "h"]` and `["h,z,h"]` are accepted. Empty tokens are skipped.
pub fn parse_gate_list<S: AsRef<str>>(
    items: &[S],
) -> Result<Vec<Instruction>, BlochError> {
    items
        .iter()
        .flat_map(|item| item.as_ref().split(LIST_SEPARATOR))
        .filter(|token| !token.trim().is_empty())
        .map(parse_instruction)
        .collect()
}

fn axis_rotation(
    token: &str,
    axis_name: char,
    params: &[&str],
) -> Result<Gate, BlochError> {
    let Some((angle, label)) = params.split_first() else {
        return Err(invalid(token, "missing angle (in multiples of π)"));
    };
    let turns = parse_number(token, "angle", angle)?;
    let axis = match axis_name {
        'x' => DVec3::X,
        'y' => DVec3::Y,
        _ => DVec3::Z,
    };
    let symbol = format!("R_{axis_name}");
    let label = custom_label(label)
        .unwrap_or_else(|| format!("R{axis_name}({}π)", format_turns(turns)));
    Gate::new(symbol, label, axis, turns * PI)
}

fn custom_rotation(token: &str, params: &[&str]) -> Result<Gate, BlochError> {
    if params.len() < 4 {
        return Err(invalid(
            token,
            "expected custom;X;Y;Z;ANGLE[;LABEL] (angle in multiples of π)",
        ));
    }
    let axis = DVec3::new(
        parse_number(token, "axis x", params[0])?,
        parse_number(token, "axis y", params[1])?,
        parse_number(token, "axis z", params[2])?,
    );
    let turns = parse_number(token, "angle", params[3])?;
    let label = custom_label(&params[4..]).unwrap_or_else(|| "U".to_owned());
    Gate::new(label.clone(), label, axis, turns * PI).map_err(|e| match e {
        BlochError::InvalidGate { reason, .. } => invalid(token, &reason),
        other => other,
    })
}

fn is_known(name: &str) -> bool {
    matches!(name, "i" | "wait" | "no_wait") || catalog::lookup(name).is_some()
}

/// Label given after the numeric parameters, if it has any text.
fn custom_label(parts: &[&str]) -> Option<String> {
    let label = parts.join(";");
    let label = label.trim();
    (!label.is_empty()).then(|| label.to_owned())
}

fn parse_number(
    token: &str,
    field: &str,
    value: &str,
) -> Result<f64, BlochError> {
    let parsed: f64 = value
        .trim()
        .parse()
        .map_err(|_| {
            invalid(token, &format!("{field} \"{value}\" is not a number"))
        })?;
    if parsed.is_finite() {
        Ok(parsed)
    } else {
        Err(invalid(token, &format!("{field} must be finite")))
    }
}

fn invalid(token: &str, reason: &str) -> BlochError {
    BlochError::InvalidGate {
        token: token.to_owned(),
        reason: reason.to_owned(),
    }
}

/// Up to three decimals, trailing zeros dropped: `0.666667` → `0.667`.
fn format_turns(turns: f64) -> String {
    let text = format!("{turns:.3}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" {
        "0".to_owned()
    } else {
        text.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gate(token: &str) -> Gate {
        match parse_instruction(token).unwrap() {
            Instruction::Gate(gate) => gate,
            other => panic!("expected a gate, got {other:?}"),
        }
    }

    #[test]
    fn dashes_are_underscores_in_names() {
        assert_eq!(gate("inv-sqrt-x").label, "√X⁻¹ Gate:");
        assert_eq!(
            parse_instruction("no-wait").unwrap(),
            Instruction::NoWait
        );
    }

    #[test]
    fn pauses_parse() {
        assert_eq!(parse_instruction("wait").unwrap(), Instruction::Wait);
        assert_eq!(parse_instruction(" i ").unwrap(), Instruction::Identity);
    }

    #[test]
    fn unknown_names_fail() {
        let err = parse_instruction("do").unwrap_err();
        assert!(matches!(err, BlochError::UnknownGate(ref n) if n == "do"));
        let err = parse_instruction("bogus;1").unwrap_err();
        assert!(matches!(err, BlochError::UnknownGate(ref n) if n == "bogus"));
    }

    #[test]
    fn axis_rotation_in_multiples_of_pi() {
        let ry = gate("ry;0.666667");
        assert_eq!(ry.axis, DVec3::Y);
        assert!((ry.angle - 0.666_667 * PI).abs() < 1e-12);
        assert_eq!(ry.label, "Ry(0.667π)");
        assert_eq!(ry.symbol, "R_y");
    }

    #[test]
    fn negative_angles_keep_their_sign() {
        let rz = gate("rz;-0.5");
        assert!((rz.angle + PI / 2.0).abs() < 1e-12);
        assert_eq!(rz.label, "Rz(-0.5π)");
    }

    #[test]
    fn axis_rotation_with_label() {
        assert_eq!(gate("rx;1;Flip").label, "Flip");
    }

    #[test]
    fn custom_rotation_normalizes_axis() {
        let u = gate("custom;0;3;4;0.25;Random");
        assert!((u.axis - DVec3::new(0.0, 0.6, 0.8)).length() < 1e-12);
        assert!((u.angle - PI / 4.0).abs() < 1e-12);
        assert_eq!(u.label, "Random");
        assert_eq!(u.symbol, "Random");
    }

    #[test]
    fn empty_labels_fall_back_to_defaults() {
        assert_eq!(gate("rx;0.5;").label, "Rx(0.5π)");
        assert_eq!(gate("ry;1; ").label, "Ry(1π)");
        let u = gate("custom;1;0;0;1;");
        assert_eq!(u.symbol, "U");
        assert_eq!(u.label, "U");
    }

    #[test]
    fn custom_rotation_defaults_to_u() {
        assert_eq!(gate("custom;1;0;0;1").symbol, "U");
    }

    #[test]
    fn malformed_parameters_fail() {
        for token in [
            "rx",
            "rx;abc",
            "rx;inf",
            "custom;1;0",
            "custom;0;0;0;1",
            "h;1",
        ] {
            let err = parse_instruction(token).unwrap_err();
            assert!(
                matches!(err, BlochError::InvalidGate { .. }),
                "{token} gave {err:?}"
            );
        }
    }

    #[test]
    fn list_accepts_commas_and_separate_items() {
        let joined = parse_gate_list(&["h,z,h"]).unwrap();
        let split = parse_gate_list(&["h", "z", "h"]).unwrap();
        assert_eq!(joined, split);
        assert_eq!(joined.len(), 3);
    }

    #[test]
    fn list_skips_empty_tokens() {
        let list = parse_gate_list(&["x,,y,", " "]).unwrap();
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn list_fails_on_first_bad_token() {
        let err = parse_gate_list(&["x", "bogus", "y"]).unwrap_err();
        assert!(matches!(err, BlochError::UnknownGate(_)));
    }

    #[test]
    fn turns_formatting() {
        assert_eq!(format_turns(1.0), "1");
        assert_eq!(format_turns(0.5), "0.5");
        assert_eq!(format_turns(1.3124), "1.312");
        assert_eq!(format_turns(-0.0001), "0");
    }
}
