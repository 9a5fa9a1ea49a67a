// User-facing camera actions and their directions.
use std::str::FromStr;

use crate::error::CamError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanDirection {
    Left,
    Right,
    Up,
    Down,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

/// One discrete user action on the camera view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CameraAction {
    Flip,
    Pan(PanDirection),
    Zoom(ZoomDirection),
    Reset,
    Round,
    Clip,
}

impl FromStr for PanDirection {
    type Err = CamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            other => Err(CamError::UnknownDirection(other.to_string())),
        }
    }
}

impl FromStr for ZoomDirection {
    type Err = CamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "in" => Ok(Self::In),
            "out" => Ok(Self::Out),
            other => Err(CamError::UnknownDirection(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_direction_names() {
        assert_eq!("left".parse::<PanDirection>().unwrap(), PanDirection::Left);
        assert_eq!("down".parse::<PanDirection>().unwrap(), PanDirection::Down);
        assert_eq!("in".parse::<ZoomDirection>().unwrap(), ZoomDirection::In);
        assert_eq!("out".parse::<ZoomDirection>().unwrap(), ZoomDirection::Out);
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "sideways".parse::<PanDirection>().unwrap_err();
        assert_eq!(err.to_string(), "unknown direction: sideways");
        assert!("Left".parse::<PanDirection>().is_err());
        assert!("up".parse::<ZoomDirection>().is_err());
    }
}
