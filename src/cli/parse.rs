/// An `--edge` argument: vertex indices and an optional weight
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeSpec {
    pub u: usize,
    pub v: usize,
    pub weight: Option<f64>,
}

/// Parse `U:V` or `U:V:WEIGHT`
pub fn parse_edge(s: &str) -> std::result::Result<EdgeSpec, String> {
    let parts: Vec<&str> = s.split(':').map(str::trim).collect();
    let index = |part: &str| {
        part.parse::<usize>()
            .map_err(|_| format!("invalid vertex index '{part}' in edge '{s}'"))
    };

    let (u, v, weight) = match parts[..] {
        [u, v] => (index(u)?, index(v)?, None),
        [u, v, w] => {
            let weight = w
                .parse::<f64>()
                .ok()
                .filter(|w| w.is_finite())
                .ok_or_else(|| format!("invalid weight '{w}' in edge '{s}'"))?;
            (index(u)?, index(v)?, Some(weight))
        }
        _ => return Err(format!("expected U:V or U:V:WEIGHT, got '{s}'")),
    };

    Ok(EdgeSpec { u, v, weight })
}
