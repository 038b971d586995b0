//! Behavioural tests for the denitrification component.
//!
//! These tests exercise the full patch calculation through the public API:
//! - Bounds on the moisture scalar and on the resolved flux
//! - The zero-flux branches (no nitrate, no respiration)
//! - The N2/N2O split, including the zero-ratio limit

use approx::assert_relative_eq;
use is_close::is_close;
use soiln_core::state::{
    CarbonDayFlux, MoistureDrivers, NitrogenDayFlux, SoilCarbonState, SoilNitrogenState,
    SoilTexture,
};
use soiln_denitrif::parameters::DenitrificationParameters;
use soiln_denitrif::{DenitrificationModel, TextureClass};

fn carbon() -> SoilCarbonState {
    SoilCarbonState { total_carbon: 10.0 }
}

fn nitrogen(nitrate: f64) -> SoilNitrogenState {
    SoilNitrogenState {
        nitrate,
        total_nitrogen: 1.0,
        volatilized_sink: 0.3,
    }
}

fn respiration(total: f64) -> CarbonDayFlux {
    CarbonDayFlux {
        soil1_hr: total * 0.25,
        soil2_hr: total * 0.25,
        soil3_hr: total * 0.25,
        soil4_hr: total * 0.25,
    }
}

fn textures() -> [SoilTexture; 3] {
    [
        SoilTexture::new(0.8, 0.1),
        SoilTexture::new(0.1, 0.7),
        SoilTexture::new(0.4, 0.3),
    ]
}

mod invariants {
    use super::*;

    #[test]
    fn test_water_scalar_in_unit_interval() {
        let component = DenitrificationModel::new();
        for texture in textures() {
            for i in 1..=25 {
                let theta = i as f64 / 25.0;
                for theta_std in [0.0, 0.01, 0.1, 0.3, 2.0] {
                    let outcome = component
                        .evaluate(
                            &carbon(),
                            &nitrogen(0.01),
                            &respiration(0.002),
                            &texture,
                            &MoistureDrivers::new(theta, theta_std),
                        )
                        .unwrap();
                    let scalar = outcome.diagnostics.water_scalar;
                    assert!(
                        (0.0..=1.0).contains(&scalar),
                        "Water scalar {} out of bounds at theta={} std={}",
                        scalar,
                        theta,
                        theta_std
                    );
                }
            }
        }
    }

    #[test]
    fn test_flux_bounds_and_split() {
        let component = DenitrificationModel::new();
        for texture in textures() {
            for nitrate in [1e-6, 1e-4, 0.001, 0.01, 0.5] {
                for hr in [0.0005, 0.001, 0.002, 0.01] {
                    for theta in [0.3, 0.6, 0.85, 1.0] {
                        let before = nitrogen(nitrate);
                        let mut state = before;
                        let mut flux = NitrogenDayFlux::default();

                        component
                            .resolve(
                                &carbon(),
                                &mut state,
                                &respiration(hr),
                                &mut flux,
                                &texture,
                                theta,
                                0.05,
                            )
                            .unwrap();

                        assert!(flux.denitrification >= 0.0);
                        assert!(flux.denitrification <= before.nitrate);
                        assert!(state.nitrate >= 0.0);
                        assert_relative_eq!(
                            state.nitrate,
                            before.nitrate - flux.denitrification,
                            max_relative = 1e-12
                        );
                        assert!(state.volatilized_sink >= before.volatilized_sink);
                        assert_eq!(flux.sminn_to_volatilization, flux.denitrification);
                        assert_eq!(state.total_nitrogen, before.total_nitrogen);

                        if flux.denitrification > 0.0 {
                            assert!(
                                is_close!(
                                    flux.denitrification_n2 + flux.denitrification_n2o,
                                    flux.denitrification
                                ),
                                "N2 + N2O should equal denitrification"
                            );
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_out_of_range_theta_treated_as_saturated() {
        let component = DenitrificationModel::new();
        let evaluate = |theta: f64| {
            component
                .evaluate(
                    &carbon(),
                    &nitrogen(0.01),
                    &respiration(0.002),
                    &SoilTexture::new(0.4, 0.3),
                    &MoistureDrivers::new(theta, 0.0),
                )
                .unwrap()
        };

        let saturated = evaluate(1.0);
        for theta in [0.0, -0.5, 1.5] {
            let outcome = evaluate(theta);
            assert_eq!(outcome.diagnostics.theta, 1.0);
            assert_eq!(outcome.flux, saturated.flux);
        }
    }

    #[test]
    fn test_sand_precedence_in_full_calculation() {
        let component = DenitrificationModel::new();
        let drivers = MoistureDrivers::new(0.7, 0.0);
        let both = component
            .evaluate(
                &carbon(),
                &nitrogen(0.01),
                &respiration(0.002),
                &SoilTexture::new(0.6, 0.6),
                &drivers,
            )
            .unwrap();
        let sand = component
            .evaluate(
                &carbon(),
                &nitrogen(0.01),
                &respiration(0.002),
                &SoilTexture::new(0.6, 0.1),
                &drivers,
            )
            .unwrap();

        assert_eq!(both.diagnostics.texture_class, TextureClass::Sand);
        assert_eq!(both.flux, sand.flux);
    }

    #[test]
    fn test_repeat_evaluation_identical() {
        let component = DenitrificationModel::new();
        let drivers = MoistureDrivers::new(0.66, 0.08);
        let run = || {
            component
                .evaluate(
                    &carbon(),
                    &nitrogen(0.02),
                    &respiration(0.0018),
                    &SoilTexture::new(0.2, 0.55),
                    &drivers,
                )
                .unwrap()
        };
        let first = run();
        let second = run();
        assert_eq!(
            first.diagnostics.water_scalar.to_bits(),
            second.diagnostics.water_scalar.to_bits()
        );
        assert_eq!(first, second);
    }
}

mod scenarios {
    use super::*;

    /// Sand at theta = 0.5 without variability uses the closed form directly.
    #[test]
    fn test_sand_point_response() {
        let component = DenitrificationModel::new();
        let outcome = component
            .evaluate(
                &carbon(),
                &nitrogen(0.01),
                &respiration(0.002),
                &SoilTexture::new(0.9, 0.05),
                &MoistureDrivers::new(0.5, 0.0),
            )
            .unwrap();

        let (a, b, c, d) = (1.56_f64, 12.0_f64, 16.0_f64, 2.01_f64);
        let expected = (a / b.powf(c / b.powf(d * 0.5))).min(1.0);
        assert_eq!(outcome.diagnostics.texture_class, TextureClass::Sand);
        assert_eq!(outcome.diagnostics.water_scalar, expected);
    }

    /// No nitrate: no flux and no change to the pools.
    #[test]
    fn test_no_nitrate() {
        let component = DenitrificationModel::new();
        for nitrate in [0.0, -0.001] {
            let before = nitrogen(nitrate);
            let mut state = before;
            let mut flux = NitrogenDayFlux {
                denitrification: 1.0,
                denitrification_n2: 1.0,
                denitrification_n2o: 1.0,
                sminn_to_volatilization: 1.0,
            };

            component
                .resolve(
                    &carbon(),
                    &mut state,
                    &respiration(0.004),
                    &mut flux,
                    &SoilTexture::new(0.3, 0.3),
                    0.9,
                    0.1,
                )
                .unwrap();

            assert_eq!(flux, NitrogenDayFlux::default());
            assert_eq!(state.nitrate, before.nitrate);
            assert_eq!(state.volatilized_sink, before.volatilized_sink);
        }
    }

    /// Nitrate ratio is defined as zero when the nitrate branch is skipped.
    #[test]
    fn test_no_nitrate_ratio_defined() {
        let component = DenitrificationModel::new();
        let outcome = component
            .evaluate(
                &carbon(),
                &nitrogen(0.0),
                &respiration(0.004),
                &SoilTexture::new(0.3, 0.3),
                &MoistureDrivers::new(0.9, 0.0),
            )
            .unwrap();
        assert_eq!(outcome.diagnostics.nitrate_ratio, 0.0);
        assert!(outcome.diagnostics.substrate.is_none());
        assert!(outcome.diagnostics.n2_n2o_ratio.is_finite());
    }

    /// No respiration: the carbon limit is zero, so nothing denitrifies.
    #[test]
    fn test_no_respiration() {
        let component = DenitrificationModel::new();
        let mut state = nitrogen(0.01);
        let mut flux = NitrogenDayFlux::default();

        component
            .resolve(
                &carbon(),
                &mut state,
                &respiration(0.0),
                &mut flux,
                &SoilTexture::new(0.3, 0.3),
                1.0,
                0.0,
            )
            .unwrap();

        assert_eq!(flux.denitrification, 0.0);
        assert_eq!(flux.denitrification_n2, 0.0);
        assert_eq!(flux.denitrification_n2o, 0.0);
        assert_eq!(state.nitrate, 0.01);
    }

    /// Quadrature samples clamped to zero are dropped without reweighting.
    #[test]
    fn test_all_quadrature_samples_dry() {
        let component = DenitrificationModel::new();
        let moisture = component.moisture();
        for class in [TextureClass::Sand, TextureClass::Clay, TextureClass::Loam] {
            assert_eq!(moisture.water_scalar(class, -2.0, 1.0), 0.0);
        }
    }

    /// A zero N2:N2O ratio sends all denitrification to N2O.
    #[test]
    fn test_zero_ratio() {
        let mut parameters = DenitrificationParameters::default();
        parameters.gas_partition.wfps_a = 0.0;
        let component = DenitrificationModel::from_parameters(parameters);

        let mut state = nitrogen(0.01);
        let mut flux = NitrogenDayFlux::default();
        component
            .resolve(
                &carbon(),
                &mut state,
                &respiration(0.002),
                &mut flux,
                &SoilTexture::new(0.4, 0.3),
                0.8,
                0.0,
            )
            .unwrap();

        assert!(flux.denitrification > 0.0);
        assert_eq!(flux.denitrification_n2o, flux.denitrification);
        assert_eq!(flux.denitrification_n2, 0.0);
        assert!(flux.denitrification_n2.is_finite() && flux.denitrification_n2o.is_finite());
    }
}
