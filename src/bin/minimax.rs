use std::{fmt, process::ExitCode, str::FromStr};

use argh::FromArgs;
use log::LevelFilter;
use minimax::{basis::Parity, Approximation, Remez, RemezConfig};

/// Minimax polynomial approximation of an elementary function.
///
/// With no function given, approximates sin(x) on [0, π] with odd powers of x.
#[derive(FromArgs)]
struct Opts {
    /// function to approximate: sin, cos, tan, exp, ln1p, sqrt, atan, tanh, arcsin or sigmoid
    #[argh(positional)]
    function: Option<Target>,

    /// lower bound of the interval (default depends on the function)
    #[argh(option)]
    a: Option<f64>,

    /// upper bound of the interval (default depends on the function)
    #[argh(option)]
    b: Option<f64>,

    /// number of free coefficients minus one
    #[argh(option, default = "3")]
    degree: usize,

    /// use odd powers of x only
    #[argh(switch)]
    odd: bool,

    /// use even powers of x only
    #[argh(switch)]
    even: bool,

    /// convergence tolerance on the spread of the error extrema
    #[argh(option, default = "minimax::DEFAULT_TOLERANCE")]
    tolerance: f64,

    /// iteration cap
    #[argh(option, default = "minimax::DEFAULT_MAX_ITERATIONS")]
    max_iterations: usize,

    /// print the result as JSON
    #[argh(switch)]
    json: bool,

    /// logging level
    #[argh(option, long = "log", default = "LevelFilter::Warn")]
    log_level: LevelFilter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    Sin,
    Cos,
    Tan,
    Exp,
    Ln1p,
    Sqrt,
    Atan,
    Tanh,
    Arcsin,
    Sigmoid,
}

impl Target {
    const ALL: [Target; 10] = [
        Target::Sin,
        Target::Cos,
        Target::Tan,
        Target::Exp,
        Target::Ln1p,
        Target::Sqrt,
        Target::Atan,
        Target::Tanh,
        Target::Arcsin,
        Target::Sigmoid,
    ];

    fn name(self) -> &'static str {
        match self {
            Target::Sin => "sin",
            Target::Cos => "cos",
            Target::Tan => "tan",
            Target::Exp => "exp",
            Target::Ln1p => "ln1p",
            Target::Sqrt => "sqrt",
            Target::Atan => "atan",
            Target::Tanh => "tanh",
            Target::Arcsin => "arcsin",
            Target::Sigmoid => "sigmoid",
        }
    }

    fn eval(self, x: f64) -> f64 {
        match self {
            Target::Sin => x.sin(),
            Target::Cos => x.cos(),
            Target::Tan => x.tan(),
            Target::Exp => x.exp(),
            Target::Ln1p => x.ln_1p(),
            Target::Sqrt => x.sqrt(),
            Target::Atan => x.atan(),
            Target::Tanh => x.tanh(),
            Target::Arcsin => x.asin(),
            Target::Sigmoid => 1.0 / (1.0 + (-x).exp()),
        }
    }

    /// An interval the function is smooth on
    fn default_interval(self) -> (f64, f64) {
        use std::f64::consts::{FRAC_PI_4, PI};
        match self {
            Target::Sin | Target::Cos => (0.0, PI),
            Target::Tan => (0.0, FRAC_PI_4),
            Target::Sqrt => (1.0, 4.0),
            Target::Arcsin => (0.0, 0.5),
            Target::Sigmoid => (-4.0, 4.0),
            Target::Exp | Target::Ln1p | Target::Atan | Target::Tanh => (0.0, 1.0),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Target {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Target::ALL
            .into_iter()
            .find(|t| t.name() == s)
            .ok_or_else(|| {
                let names: Vec<_> = Target::ALL.iter().map(|t| t.name()).collect();
                format!("unknown function `{s}`, expected one of: {}", names.join(", "))
            })
    }
}

fn print_text(target: Target, approx: &Approximation) {
    let powers = match approx.parity() {
        Parity::Full => String::new(),
        parity => format!(" for {}", parity.label()),
    };

    println!(
        "{target}(x), degree {} ({}) after {} iterations",
        approx.degree(),
        approx.termination(),
        approx.iterations()
    );
    println!("Coefficients{powers}: {:?}", approx.coefficients());
    println!("{:.12}", approx.polynomial());
    println!(
        "The polynomial achieves an L_inf error of {:e}.",
        approx.achieved_error()
    );
}

fn main() -> ExitCode {
    let opts: Opts = argh::from_env();
    env_logger::Builder::new()
        .filter_level(opts.log_level)
        .init();

    let target = opts.function.unwrap_or(Target::Sin);
    let (default_a, default_b) = target.default_interval();
    let (a, b) = (opts.a.unwrap_or(default_a), opts.b.unwrap_or(default_b));

    // The sample run uses odd powers unless told otherwise
    let odd = opts.odd || (opts.function.is_none() && !opts.even);

    let mut remez = Remez::new(|x| target.eval(x), a..=b)
        .degree(opts.degree)
        .config(
            RemezConfig::default()
                .tolerance(opts.tolerance)
                .max_iterations(opts.max_iterations),
        );
    if odd {
        remez = remez.odd();
    }
    if opts.even {
        remez = remez.even();
    }

    let approx = match remez.run() {
        Ok(approx) => approx,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    if opts.json {
        match serde_json::to_string_pretty(&approx) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("error: {err}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        print_text(target, &approx);
    }

    ExitCode::SUCCESS
}
