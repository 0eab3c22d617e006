
// Currently the only device supported here is the XMOS startKIT running the
// scope firmware. If other boards ever speak this framing, they'll get their
// own modules alongside it.

pub mod startkit;
