//! Unit metadata served to hosts: port roles, range hints, identity.

/// The unit's externally numbered ports, in port-table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortRole {
    /// Output gain control.
    Amplitude = 0,
    /// Envelope decay control.
    Sustain = 1,
    /// Rendered audio.
    Output = 2,
    /// Audio-rate signal driving the envelope.
    Input = 3,
}

impl PortRole {
    /// Every role, in port-table order.
    pub const ALL: [PortRole; 4] = [
        PortRole::Amplitude,
        PortRole::Sustain,
        PortRole::Output,
        PortRole::Input,
    ];

    /// Stable index of this role in the port table.
    pub fn index(self) -> usize {
        self as usize
    }

    /// True for the two control ports.
    pub fn is_control(self) -> bool {
        matches!(self, PortRole::Amplitude | PortRole::Sustain)
    }

    /// True for the two audio ports.
    pub fn is_audio(self) -> bool {
        !self.is_control()
    }
}

/// The kind of data a port carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortKind {
    /// One scalar per block, host-supplied.
    ControlInput,
    /// Per-sample stream, host-supplied.
    AudioInput,
    /// Per-sample stream, unit-produced.
    AudioOutput,
}

/// Default value policy for a control port.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PortDefault {
    /// A literal default value.
    Value(f32),
    /// Midpoint of the bounded range.
    Middle,
}

/// Value bounds and UI hints for a port.
///
/// Audio ports carry unrestricted sample streams and use the unhinted
/// default. The hints are informational: nothing in the processing core
/// enforces them, they exist so a host can build faders and validate
/// automation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RangeHint {
    pub lower: Option<f32>,
    pub upper: Option<f32>,
    /// Suggests a logarithmic fader mapping.
    pub logarithmic: bool,
    pub default: Option<PortDefault>,
}

impl RangeHint {
    /// Resolves the default policy to a concrete value, if there is one.
    ///
    /// `Middle` needs both bounds; it resolves to their midpoint.
    pub fn default_value(&self) -> Option<f32> {
        match self.default? {
            PortDefault::Value(v) => Some(v),
            PortDefault::Middle => self
                .lower
                .zip(self.upper)
                .map(|(lo, hi)| 0.5 * (lo + hi)),
        }
    }
}

/// One row of the port table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PortInfo {
    pub name: &'static str,
    pub role: PortRole,
    pub kind: PortKind,
    pub hint: RangeHint,
}

/// Static description of a unit: identity, capability, port table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitDescriptor {
    pub unique_id: u32,
    /// Short machine-friendly identifier.
    pub label: &'static str,
    /// Human-readable display name.
    pub name: &'static str,
    pub maker: &'static str,
    pub copyright: Option<&'static str>,
    /// Safe to run from a hard-realtime audio callback: processing never
    /// blocks or allocates.
    pub hard_rt_capable: bool,
    pub ports: &'static [PortInfo],
}

impl UnitDescriptor {
    /// Looks up the port table row for a role.
    pub fn port(&self, role: PortRole) -> &PortInfo {
        &self.ports[role.index()]
    }
}

static PORTS: [PortInfo; 4] = [
    PortInfo {
        name: "Amplitude",
        role: PortRole::Amplitude,
        kind: PortKind::ControlInput,
        hint: RangeHint {
            lower: Some(0.0),
            upper: None,
            logarithmic: true,
            default: Some(PortDefault::Value(1.0)),
        },
    },
    PortInfo {
        name: "Sustain",
        role: PortRole::Sustain,
        kind: PortKind::ControlInput,
        hint: RangeHint {
            lower: Some(1.0),
            upper: Some(100.0),
            logarithmic: false,
            default: Some(PortDefault::Middle),
        },
    },
    PortInfo {
        name: "Output",
        role: PortRole::Output,
        kind: PortKind::AudioOutput,
        hint: RangeHint {
            lower: None,
            upper: None,
            logarithmic: false,
            default: None,
        },
    },
    PortInfo {
        name: "Input",
        role: PortRole::Input,
        kind: PortKind::AudioInput,
        hint: RangeHint {
            lower: None,
            upper: None,
            logarithmic: false,
            default: None,
        },
    },
];

/// Descriptor for the hi-hat unit.
pub fn descriptor() -> UnitDescriptor {
    UnitDescriptor {
        unique_id: 42069,
        label: "hat420",
        name: "HighHat420",
        maker: "Walm",
        copyright: None,
        hard_rt_capable: true,
        ports: &PORTS,
    }
}

/// An explicit collection of unit descriptors.
///
/// The embedding layer builds one registry at startup and hands references
/// to whatever discovery surface it exposes. Nothing here is global or
/// lazily initialized; dropping the registry drops the catalog.
///
/// # Examples
///
/// ```
/// use hat420::Registry;
///
/// let registry = Registry::with_builtin();
/// let desc = registry.by_label("hat420").unwrap();
/// assert_eq!(desc.unique_id, 42069);
/// ```
#[derive(Debug, Default)]
pub struct Registry {
    descriptors: Vec<UnitDescriptor>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            descriptors: Vec::new(),
        }
    }

    /// Creates a registry pre-loaded with this crate's unit.
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.register(descriptor());
        registry
    }

    /// Adds a descriptor to the catalog.
    pub fn register(&mut self, descriptor: UnitDescriptor) {
        self.descriptors.push(descriptor);
    }

    /// Descriptor at a catalog index.
    pub fn get(&self, index: usize) -> Option<&UnitDescriptor> {
        self.descriptors.get(index)
    }

    /// Finds a descriptor by its unique id.
    pub fn by_unique_id(&self, id: u32) -> Option<&UnitDescriptor> {
        self.descriptors.iter().find(|d| d.unique_id == id)
    }

    /// Finds a descriptor by its label.
    pub fn by_label(&self, label: &str) -> Option<&UnitDescriptor> {
        self.descriptors.iter().find(|d| d.label == label)
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}
