use bs_surface::{
    arange, linspace, price, sample_surface, sample_surface_with_config, GridConfig, OptionType,
    SurfaceError,
};

/// The reference sweep dimensions: 20 volatility samples in [0.10, 0.50)
/// and 12 rate samples in [0.01, 0.25), both stepped by 0.02.
#[test]
fn test_arange_reference_ranges() {
    let vols = arange(0.10, 0.50, 0.02).unwrap();
    assert_eq!(vols.len(), 20);
    assert!((vols[0] - 0.10).abs() < 1e-12);
    assert!((vols[19] - 0.48).abs() < 1e-12);

    let rates = arange(0.01, 0.25, 0.02).unwrap();
    assert_eq!(rates.len(), 12);
    assert!((rates[0] - 0.01).abs() < 1e-12);
    assert!((rates[11] - 0.23).abs() < 1e-12);

    // Both axes are ascending with uniform spacing
    for axis in [&vols, &rates] {
        for pair in axis.windows(2) {
            assert!((pair[1] - pair[0] - 0.02).abs() < 1e-12);
        }
    }
}

#[test]
fn test_arange_validation() {
    assert!(matches!(
        arange(0.1, 0.5, 0.0),
        Err(SurfaceError::InvalidParameter { name: "step", .. })
    ));
    assert!(matches!(
        arange(0.1, 0.5, -0.02),
        Err(SurfaceError::InvalidParameter { name: "step", .. })
    ));
    assert!(arange(f64::NAN, 0.5, 0.02).is_err());
    assert!(arange(0.1, f64::INFINITY, 0.02).is_err());

    // Degenerate spans produce empty axes, not errors
    assert!(arange(0.5, 0.5, 0.02).unwrap().is_empty());
    assert!(arange(0.5, 0.1, 0.02).unwrap().is_empty());
}

#[test]
fn test_linspace() {
    let axis = linspace(0.0, 1.0, 5).unwrap();
    assert_eq!(axis, vec![0.0, 0.25, 0.5, 0.75, 1.0]);

    assert_eq!(linspace(0.3, 0.9, 1).unwrap(), vec![0.3]);
    assert!(linspace(0.3, 0.9, 0).unwrap().is_empty());
    assert!(linspace(f64::NAN, 1.0, 3).is_err());
}

/// Matrix shape is (rate samples, volatility samples) and every cell equals
/// the pricing engine's output for its axis pair.
#[test]
fn test_surface_shape_and_cells() {
    let vols = arange(0.10, 0.50, 0.02).unwrap();
    let rates = arange(0.01, 0.25, 0.02).unwrap();

    for kind in [OptionType::Call, OptionType::Put] {
        let surface = sample_surface(kind, 110.0, 100.0, 1.0, &vols, &rates).unwrap();

        assert_eq!(surface.shape(), (12, 20));
        assert_eq!(surface.prices.len(), rates.len());

        for (i, row) in surface.prices.iter().enumerate() {
            assert_eq!(row.len(), vols.len(), "ragged row at rate index {}", i);
            for (j, &cell) in row.iter().enumerate() {
                let expected = price(kind, 110.0, 100.0, 1.0, vols[j], rates[i]).unwrap();
                assert_eq!(
                    cell, expected,
                    "cell mismatch at rate index {} / vol index {}",
                    i, j
                );
            }
        }
    }
}

#[test]
fn test_surface_get() {
    let surface = sample_surface(
        OptionType::Call,
        110.0,
        100.0,
        1.0,
        &[0.1, 0.2, 0.3],
        &[0.01, 0.05],
    )
    .unwrap();

    assert_eq!(surface.get(0, 0), Some(surface.prices[0][0]));
    assert_eq!(surface.get(1, 2), Some(surface.prices[1][2]));
    assert_eq!(surface.get(2, 0), None);
    assert_eq!(surface.get(0, 3), None);
}

/// Prices rise with volatility along every row and (for calls) rise with the
/// rate along every column.
#[test]
fn test_surface_monotonicity() {
    let vols = arange(0.10, 0.50, 0.02).unwrap();
    let rates = arange(0.01, 0.25, 0.02).unwrap();
    let surface = sample_surface(OptionType::Call, 110.0, 100.0, 1.0, &vols, &rates).unwrap();

    for row in &surface.prices {
        for pair in row.windows(2) {
            assert!(pair[1] >= pair[0] - 1e-12, "row not monotone in vol");
        }
    }
    for j in 0..vols.len() {
        for i in 0..rates.len() - 1 {
            assert!(
                surface.prices[i + 1][j] >= surface.prices[i][j] - 1e-12,
                "call column not monotone in rate"
            );
        }
    }
}

#[test]
fn test_empty_axes() {
    let err = sample_surface(OptionType::Call, 100.0, 100.0, 1.0, &[], &[0.05]).unwrap_err();
    assert_eq!(err, SurfaceError::EmptyAxis { axis: "volatility" });

    let err = sample_surface(OptionType::Call, 100.0, 100.0, 1.0, &[0.2], &[]).unwrap_err();
    assert_eq!(err, SurfaceError::EmptyAxis { axis: "rate" });
}

/// A grid point with a non-positive volatility aborts the whole sweep with
/// the engine's own InvalidParameter; no partial matrix comes back.
#[test]
fn test_fail_fast_on_invalid_cell() {
    let err =
        sample_surface(OptionType::Put, 100.0, 100.0, 1.0, &[-0.1, 0.2], &[0.05]).unwrap_err();
    assert!(matches!(
        err,
        SurfaceError::InvalidParameter { name: "volatility", .. }
    ));
}

#[test]
fn test_grid_config_defaults() {
    let config = GridConfig::default();
    assert_eq!(config, GridConfig::reference());

    assert!((config.vol_min - 0.10).abs() < 1e-12);
    assert!((config.vol_max - 0.50).abs() < 1e-12);
    assert!((config.rate_min - 0.01).abs() < 1e-12);
    assert!((config.rate_max - 0.25).abs() < 1e-12);

    assert_eq!(config.vol_axis().unwrap().len(), 20);
    assert_eq!(config.rate_axis().unwrap().len(), 12);
}

#[test]
fn test_sample_surface_with_config() {
    let surface =
        sample_surface_with_config(OptionType::Put, 110.0, 100.0, 1.0, &GridConfig::reference())
            .unwrap();
    assert_eq!(surface.shape(), (12, 20));

    // Misconfigured bounds reaching into Vol <= 0 surface as InvalidParameter
    let bad = GridConfig {
        vol_min: -0.04,
        ..GridConfig::reference()
    };
    let err = sample_surface_with_config(OptionType::Put, 110.0, 100.0, 1.0, &bad).unwrap_err();
    assert!(matches!(
        err,
        SurfaceError::InvalidParameter { name: "volatility", .. }
    ));
}

/// Partial TOML configurations deserialize with the reference defaults
/// filling the gaps.
#[cfg(feature = "serde")]
#[test]
fn test_grid_config_from_toml() {
    let config: GridConfig = toml::from_str("vol_min = 0.2\nvol_max = 0.4\n").unwrap();

    assert!((config.vol_min - 0.2).abs() < 1e-12);
    assert!((config.vol_max - 0.4).abs() < 1e-12);
    assert!((config.vol_step - 0.02).abs() < 1e-12);
    assert!((config.rate_min - 0.01).abs() < 1e-12);
    assert!((config.rate_max - 0.25).abs() < 1e-12);

    assert_eq!(config.vol_axis().unwrap().len(), 10);
}
