// crates/mh_setrun/src/io/emit.rs

//! 各 `.data` 文件的写出（字段顺序即求解器的读取顺序）

use super::data::{format_real, DataValue, DataWriter};
use super::names;
use crate::amr::RefinementTrigger;
use crate::config::RunConfig;
use crate::geo::Friction;
use crate::schedule::{CheckpointStyle, OutputStyle, Restart};

fn path_row(w: &mut DataWriter, path: &std::path::Path) {
    w.row(&[path.render()]);
}

pub(super) fn claw(config: &RunConfig) -> String {
    let domain = config.domain();
    let equations = config.domain_scheme().equations();
    let scheme = config.domain_scheme().scheme();
    let schedule = config.schedule();
    let controls = schedule.controls();
    let stepping = schedule.stepping();

    let mut w = DataWriter::new(names::CLAW);
    w.field("num_dim", &2u32)
        .field("lower", &domain.lower())
        .field("upper", &domain.upper())
        .field("num_cells", &domain.num_cells())
        .blank()
        .field("num_eqn", &equations.num_eqn)
        .field("num_aux", &equations.num_aux)
        .field("capacity_index", &equations.capacity_index.map_or(0, |i| i + 1))
        .blank()
        .field("t0", &schedule.t0())
        .blank()
        .field("output_style", &schedule.output().code());

    match schedule.output() {
        OutputStyle::EquallySpaced {
            num_output_times,
            t_final,
            output_t0,
        } => {
            w.field("num_output_times", num_output_times)
                .field("tfinal", t_final)
                .field("output_t0", output_t0);
        }
        OutputStyle::Times { times } => {
            w.field("num_output_times", &times.len())
                .field("output_times", times);
        }
        OutputStyle::StepInterval {
            step_interval,
            total_steps,
            output_t0,
        } => {
            w.field("output_step_interval", step_interval)
                .field("total_steps", total_steps)
                .field("output_t0", output_t0);
        }
    }

    let limiters: Vec<i64> = scheme.limiters.iter().map(|l| l.code()).collect();
    let bc_lower = scheme.boundaries.lower.map(|b| b.code());
    let bc_upper = scheme.boundaries.upper.map(|b| b.code());
    w.blank()
        .field("output_format", &controls.format.code())
        .field("output_q_components", &controls.q_components.flags(equations.num_eqn as usize))
        .field("output_aux_components", &controls.aux_components.flags(equations.num_aux as usize))
        .field("output_aux_onlyonce", &controls.aux_only_once)
        .blank()
        .field("dt_initial", &stepping.dt_initial)
        .field("dt_max", &stepping.dt_max)
        .field("cfl_max", &stepping.cfl_max)
        .field("cfl_desired", &stepping.cfl_desired)
        .field("steps_max", &stepping.steps_max)
        .blank()
        .field("dt_variable", &stepping.dt_variable)
        .field("order", &scheme.order.code())
        .field("transverse_waves", &scheme.transverse_waves.code())
        .field("dimensional_split", &scheme.dimensional_split.code())
        .field("verbosity", &controls.verbosity)
        .field("source_split", &scheme.source_split.code())
        .field("num_waves", &scheme.num_waves)
        .field("limiter", &limiters)
        .field("use_fwaves", &scheme.use_fwaves)
        .blank()
        .field("num_ghost", &scheme.num_ghost)
        .field("bc_lower", &bc_lower)
        .field("bc_upper", &bc_upper)
        .blank();

    match schedule.restart() {
        Restart::Fresh => w.field("restart", &false).field("restart_file", ""),
        Restart::FromCheckpoint { file } => w.field("restart", &true).field("restart_file", file),
    };

    w.blank()
        .field("checkpt_style", &schedule.checkpoint().code());
    match schedule.checkpoint() {
        CheckpointStyle::Times { times } => {
            w.field("num_checkpt_times", &times.len())
                .field("checkpt_times", times);
        }
        CheckpointStyle::StepInterval { interval } => {
            w.field("checkpt_interval", interval);
        }
        CheckpointStyle::None | CheckpointStyle::FinalTime => {}
    }
    w.finish()
}

pub(super) fn amr(config: &RunConfig) -> String {
    let amr = config.amr();
    let ratios = amr.ratios();
    let regrid = amr.regrid();
    let aux_types: Vec<String> = config
        .domain_scheme()
        .equations()
        .aux_types
        .iter()
        .map(|a| a.name().to_string())
        .collect();
    let (richardson, tolerance) = match amr.trigger() {
        RefinementTrigger::Richardson { tolerance } => (true, tolerance),
        RefinementTrigger::FlagToRefine => (false, -1.0),
    };

    let mut w = DataWriter::new(names::AMR);
    w.field("amr_levels_max", &amr.max_levels())
        .field("refinement_ratios_x", &ratios.x)
        .field("refinement_ratios_y", &ratios.y)
        .field("refinement_ratios_t", &ratios.t)
        .blank()
        .field("aux_type", &aux_types)
        .blank()
        .field("flag_richardson", &richardson)
        .field("flag_richardson_tol", &tolerance)
        .field("flag2refine", &!richardson)
        .blank()
        .field("regrid_interval", &regrid.regrid_interval)
        .field("regrid_buffer_width", &regrid.buffer_width)
        .field("clustering_cutoff", &regrid.clustering_cutoff)
        .field("verbosity_regrid", &regrid.verbosity)
        .blank();
    for (name, value) in amr.diagnostics().flags() {
        w.field(name, &value);
    }
    w.finish()
}

pub(super) fn geoclaw(config: &RunConfig) -> String {
    let geo = config.geo();
    let (friction_forcing, manning, friction_depth) = match geo.friction {
        Friction::Off => (false, 0.0, 0.0),
        Friction::Manning { coefficient, depth } => (true, coefficient, depth),
    };

    let mut w = DataWriter::new(names::GEOCLAW);
    w.field("gravity", &geo.gravity)
        .field("coordinate_system", &config.domain().coordinate_system().code())
        .field("earth_radius", &geo.earth_radius)
        .field("coriolis_forcing", &geo.coriolis_forcing)
        .field("sea_level", &geo.sea_level)
        .blank()
        .field("friction_forcing", &friction_forcing)
        .field("manning_coefficient", &manning)
        .field("friction_depth", &friction_depth)
        .blank()
        .field("dry_tolerance", &geo.dry_tolerance);
    w.finish()
}

pub(super) fn refinement(config: &RunConfig) -> String {
    let data = config.refinement();
    let mut w = DataWriter::new(names::REFINEMENT);
    w.field("wave_tolerance", &data.wave_tolerance)
        .field("deep_depth", &data.deep_depth)
        .field("max_level_deep", &data.max_level_deep)
        .field("variable_dt_refinement_ratios", &data.variable_dt_refinement_ratios);
    w.finish()
}

pub(super) fn regions(config: &RunConfig) -> String {
    let regions = config.regions();
    let mut w = DataWriter::new(names::REGIONS);
    w.field("num_regions", &regions.len());
    for r in regions.as_slice() {
        w.row(&[
            r.min_level.to_string(),
            r.max_level.to_string(),
            format_real(r.t_start),
            format_real(r.t_end),
            format_real(r.x_lo),
            format_real(r.x_hi),
            format_real(r.y_lo),
            format_real(r.y_hi),
        ]);
    }
    w.finish()
}

pub(super) fn gauges(config: &RunConfig) -> String {
    let gauges = config.gauges();
    let mut w = DataWriter::new(names::GAUGES);
    w.field("num_gauges", &gauges.len());
    for g in gauges.as_slice() {
        w.row(&[
            g.id.to_string(),
            format_real(g.x),
            format_real(g.y),
            format_real(g.t_start),
            format_real(g.t_end),
            format_real(g.min_sample_interval),
        ]);
    }
    w.finish()
}

pub(super) fn topo(config: &RunConfig) -> String {
    let topo = config.sources().topo();
    let mut w = DataWriter::new(names::TOPO);
    w.field("num_topo_files", &topo.len());
    for t in topo {
        w.blank();
        path_row(&mut w, &t.path);
        w.row(&[
            t.topo_type.to_string(),
            t.min_level.to_string(),
            t.max_level.to_string(),
            format_real(t.t_start),
            format_real(t.t_end),
        ]);
    }
    w.finish()
}

pub(super) fn dtopo(config: &RunConfig) -> String {
    let sources = config.sources();
    let mut w = DataWriter::new(names::DTOPO);
    let dtopo = sources.dtopo();
    w.field("num_dtopo_files", &dtopo.map_or(0usize, |_| 1));
    if let Some(d) = dtopo {
        w.blank();
        path_row(&mut w, &d.path);
        w.row(&[
            d.dtopo_type.to_string(),
            d.min_level.to_string(),
            d.max_level.to_string(),
        ]);
    }
    w.blank().field("dt_max_dtopo", &sources.dt_max_dtopo());
    w.finish()
}

pub(super) fn qinit(config: &RunConfig) -> String {
    let mut w = DataWriter::new(names::QINIT);
    match config.sources().perturbation() {
        None => {
            w.field("qinit_type", &0i64);
        }
        Some(q) => {
            w.field("qinit_type", &q.kind.code()).blank();
            path_row(&mut w, &q.path);
            w.row(&[q.min_level.to_string(), q.max_level.to_string()]);
        }
    }
    w.finish()
}

pub(super) fn fixed_grids(config: &RunConfig) -> String {
    let grids = config.sources().fixed_grids();
    let mut w = DataWriter::new(names::FIXED_GRIDS);
    w.field("num_fixed_grids", &grids.len());
    for g in grids {
        w.row(&[
            format_real(g.t_start),
            format_real(g.t_end),
            g.num_output.to_string(),
            format_real(g.x_lo),
            format_real(g.x_hi),
            format_real(g.y_lo),
            format_real(g.y_hi),
            g.nx_points.to_string(),
            g.ny_points.to_string(),
            u8::from(g.arrival_times).to_string(),
            u8::from(g.surface_max).to_string(),
        ]);
    }
    w.finish()
}

pub(super) fn fgmax(config: &RunConfig) -> String {
    let sources = config.sources();
    let mut w = DataWriter::new(names::FGMAX);
    w.field("num_fgmax_val", &sources.num_fgmax_val())
        .field("num_fgmax_grids", &sources.fgmax().len());
    for f in sources.fgmax() {
        w.blank();
        path_row(&mut w, &f.path);
        w.row(&[f.min_level.to_string(), f.max_level.to_string()]);
    }
    w.finish()
}
