use anyhow::anyhow;
use smithay_client_toolkit::{
    compositor::CompositorState,
    output::OutputState,
    registry::RegistryState,
    seat::SeatState,
    shell::{
        WaylandSurface,
        wlr_layer::{KeyboardInteractivity, Layer, LayerShell, LayerSurface},
    },
    shm::{Shm, slot::SlotPool},
};
use wayland_client::{
    QueueHandle, globals::GlobalList, protocol::wl_keyboard::WlKeyboard,
    protocol::wl_shm::Format::Argb8888,
};

use crate::{ClockScreen, canvas_primitives::CanvasPrimitives, layout::Layout};

const NAMESPACE: &str = "dialtime";

/// Wayland side of the screen: globals, the layer surface and its buffers.
pub struct Widget {
    pub registry_state: RegistryState,
    pub seat_state: SeatState,
    pub output_state: OutputState,
    pub shm: Shm,
    pub pool: SlotPool,
    pub layer: LayerSurface,
    pub keyboard: Option<WlKeyboard>,
    pub exit: bool,
}

impl Widget {
    pub fn new(
        globals: &GlobalList,
        qh: &QueueHandle<ClockScreen>,
        layout: &Layout,
        layer: Layer,
    ) -> anyhow::Result<Self> {
        let shm = Shm::bind(globals, qh)?;
        let compositor = CompositorState::bind(globals, qh)?;
        let layer_shell = LayerShell::bind(globals, qh)?;

        let surface = compositor.create_surface(qh);
        let layer = layer_shell.create_layer_surface(qh, surface, layer, Some(NAMESPACE), None);
        layer.set_keyboard_interactivity(KeyboardInteractivity::OnDemand);
        layer.set_size(layout.width as u32, layout.height as u32);
        layer.commit();

        let pool = SlotPool::new((layout.width * layout.height * 4) as usize, &shm)?;

        Ok(Self {
            registry_state: RegistryState::new(globals),
            seat_state: SeatState::new(globals, qh),
            output_state: OutputState::new(globals, qh),
            shm,
            pool,
            layer,
            keyboard: None,
            exit: false,
        })
    }

    pub fn update_surface(&mut self, primitives: &CanvasPrimitives) -> anyhow::Result<()> {
        let (width, height) = (primitives.width, primitives.height);

        let (buffer, canvas) =
            self.pool.create_buffer(width, height, primitives.stride(), Argb8888)?;
        canvas.copy_from_slice(primitives.get_data());

        let wl_surface = self.layer.wl_surface();
        wl_surface.damage_buffer(0, 0, width, height);
        buffer
            .attach_to(wl_surface)
            .map_err(|err| anyhow!("buffer attach: {:?}", err))?;
        self.layer.commit();

        Ok(())
    }
}
