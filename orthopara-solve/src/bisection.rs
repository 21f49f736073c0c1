mod config;
mod error;
mod solution;

pub use config::Config;
pub use error::Error;
pub use solution::{Solution, Status};

/// Finds a root of `f` by bisection.
///
/// The residual returned by `f` must increase monotonically over the bracket:
/// a positive midpoint residual pulls the upper bound down, a negative one
/// pushes the lower bound up. Bracket endpoints are never evaluated, so a
/// bound may sit just outside the domain of `f` (0 K, for example) as long as
/// every midpoint stays inside it.
///
/// Failing to converge is not an error: whether the iteration budget runs out
/// or the bracket collapses to float resolution first (no root inside it),
/// the solver returns its best midpoint with [`Status::MaxIters`] and leaves
/// the interpretation to the caller.
///
/// # Errors
///
/// Returns an error if the bracket or config is invalid, if `f` fails, or if
/// `f` produces a non-finite residual.
pub fn solve<E, F>(mut f: F, bracket: [f64; 2], config: &Config) -> Result<Solution, Error>
where
    F: FnMut(f64) -> Result<f64, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    config
        .validate()
        .map_err(|reason| Error::InvalidConfig { reason })?;

    let (mut left, mut right) = validate_bracket(bracket)?;

    let mut best = (f64::NAN, f64::INFINITY);

    for iter in 1..=config.max_iters {
        let mid = 0.5 * (left + right);
        let residual = f(mid).map_err(|e| Error::Residual(Box::new(e)))?;

        if !residual.is_finite() {
            return Err(Error::NonFiniteResidual { x: mid, residual });
        }

        let x_converged = (right - left).abs() <= config.x_abs_tol + config.x_rel_tol * mid.abs();
        let residual_converged = residual.abs() <= config.residual_tol;

        if residual_converged || x_converged {
            return Ok(Solution {
                status: Status::Converged,
                x: mid,
                residual,
                iters: iter,
            });
        }

        if residual.abs() < best.1.abs() {
            best = (mid, residual);
        }

        // The midpoint collapsing onto a bound means the bracket cannot be
        // subdivided further; happens when no root exists inside it.
        #[allow(clippy::float_cmp)]
        if mid == left || mid == right {
            return Ok(Solution {
                status: Status::MaxIters,
                x: best.0,
                residual: best.1,
                iters: iter,
            });
        }

        if residual > 0.0 {
            right = mid;
        } else {
            left = mid;
        }
    }

    Ok(Solution {
        status: Status::MaxIters,
        x: best.0,
        residual: best.1,
        iters: config.max_iters,
    })
}

/// Validates bracket values and returns them in normalized (left < right) order.
fn validate_bracket(bracket: [f64; 2]) -> Result<(f64, f64), Error> {
    let [left, right] = bracket;

    if !left.is_finite() {
        return Err(Error::NonFiniteBracket { value: left });
    }

    if !right.is_finite() {
        return Err(Error::NonFiniteBracket { value: right });
    }

    #[allow(clippy::float_cmp)]
    if left == right {
        return Err(Error::ZeroWidthBracket { value: left });
    }

    if left < right {
        Ok((left, right))
    } else {
        Ok((right, left))
    }
}
