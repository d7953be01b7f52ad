use std::io::{self, BufRead, Write};

use crate::dynamics::{Command, Vector2, VehicleState};
use crate::error::{AutopilotError, Result};

// ---------------------------------------------------------------------------
// Line protocol with the simulator
//
// startup:  n, then n lines of "x y"
// per tick: "x y vx vy fuel rotation thrust"  ->  "angle thrust"
// ---------------------------------------------------------------------------

const TICK_FIELDS: usize = 7;

fn parse_fields(line: &str, context: &'static str, expected: usize) -> Result<Vec<i32>> {
    let values = line
        .split_whitespace()
        .map(|token| {
            token.parse::<i32>().map_err(|source| AutopilotError::InvalidNumber {
                token: token.to_string(),
                source,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    if values.len() != expected {
        return Err(AutopilotError::FieldCount { context, expected, found: values.len() });
    }
    Ok(values)
}

/// Next line without its terminator, or None at end of input.
fn next_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

fn require_line<R: BufRead>(input: &mut R, context: &'static str) -> Result<String> {
    next_line(input)?.ok_or(AutopilotError::UnexpectedEof { context })
}

/// Read the surface profile sent once before the first tick.
pub fn read_surface<R: BufRead>(input: &mut R) -> Result<Vec<Vector2>> {
    let header = require_line(input, "surface point count")?;
    let count = parse_fields(&header, "surface point count", 1)?[0];
    let count = usize::try_from(count).map_err(|_| AutopilotError::MalformedLine {
        context: "surface point count",
        line: header.clone(),
    })?;

    let mut surface = Vec::with_capacity(count);
    for _ in 0..count {
        let line = require_line(input, "surface point")?;
        let xy = parse_fields(&line, "surface point", 2)?;
        surface.push(Vector2::new(xy[0], xy[1]));
    }
    Ok(surface)
}

pub fn parse_tick(line: &str) -> Result<VehicleState> {
    let f = parse_fields(line, "tick", TICK_FIELDS)?;
    Ok(VehicleState {
        position: Vector2::new(f[0], f[1]),
        velocity: Vector2::new(f[2], f[3]),
        fuel: f[4],
        rotation: f[5],
        thrust: f[6],
    })
}

/// Read one tick of vehicle state. `Ok(None)` means the simulator closed the
/// channel between ticks; anything partial is an error.
pub fn read_tick<R: BufRead>(input: &mut R) -> Result<Option<VehicleState>> {
    match next_line(input)? {
        Some(line) => parse_tick(&line).map(Some),
        None => Ok(None),
    }
}

pub fn write_command<W: Write>(writer: &mut W, command: &Command) -> io::Result<()> {
    writeln!(writer, "{} {}", command.angle, command.thrust)?;
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reads_surface_block() {
        let mut input = Cursor::new("3\n0 100\n500 100\n1500 100\n3000 2000 10 -50 500 0 2\n");
        let surface = read_surface(&mut input).unwrap();
        assert_eq!(
            surface,
            vec![Vector2::new(0, 100), Vector2::new(500, 100), Vector2::new(1500, 100)]
        );
        // Tick line is left for the driver.
        let tick = read_tick(&mut input).unwrap().unwrap();
        assert_eq!(tick.position, Vector2::new(3000, 2000));
    }

    #[test]
    fn truncated_surface_is_an_error() {
        let mut input = Cursor::new("3\n0 100\n500 100\n");
        assert!(matches!(
            read_surface(&mut input),
            Err(AutopilotError::UnexpectedEof { .. })
        ));
        assert!(read_surface(&mut Cursor::new("")).is_err());
        assert!(read_surface(&mut Cursor::new("-1\n")).is_err());
        assert!(read_surface(&mut Cursor::new("1\n0\n")).is_err());
    }

    #[test]
    fn parses_tick_fields_in_order() {
        let s = parse_tick("3000 2000 10 -50 500 -15 3\r").unwrap();
        assert_eq!(s.position, Vector2::new(3000, 2000));
        assert_eq!(s.velocity, Vector2::new(10, -50));
        assert_eq!(s.fuel, 500);
        assert_eq!(s.rotation, -15);
        assert_eq!(s.thrust, 3);
    }

    #[test]
    fn malformed_tick_is_rejected() {
        assert!(matches!(
            parse_tick("3000 2000 10 -50 500 0"),
            Err(AutopilotError::FieldCount { expected: 7, found: 6, .. })
        ));
        assert!(matches!(
            parse_tick("3000 2000 ten -50 500 0 2"),
            Err(AutopilotError::InvalidNumber { .. })
        ));
        assert!(parse_tick("").is_err());
    }

    #[test]
    fn end_of_input_between_ticks_is_clean() {
        let mut input = Cursor::new("");
        assert!(read_tick(&mut input).unwrap().is_none());
    }

    #[test]
    fn command_line_format() {
        let mut out = Vec::new();
        write_command(&mut out, &Command { angle: -45, thrust: 4 }).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "-45 4\n");
    }
}
