use super::Graph;
use crate::error::{ConnectionError, GraphError};
use crate::model::{BlockId, Port, PortDirection, PortId};

impl Graph {
    /// Connects `input` of block `sink` to `output` of block `source`.
    ///
    /// Checks run in order: port ownership, connection type, then capacity on the sink and
    /// the source. Connecting the same pair twice records two parallel edges.
    pub fn connect(
        &mut self,
        sink: BlockId,
        input: PortId,
        source: BlockId,
        output: PortId,
    ) -> Result<(), ConnectionError> {
        let sink_port = self.owned_port(sink, input, PortDirection::Input)?;
        let source_port = self.owned_port(source, output, PortDirection::Output)?;

        if sink_port.connection_type != source_port.connection_type {
            return Err(ConnectionError::TypeMismatch {
                sink: input,
                sink_type: sink_port.connection_type,
                output,
                output_type: source_port.connection_type,
            });
        }

        for (id, port) in [(input, sink_port), (output, source_port)] {
            if port.is_saturated(self.targets(id).len()) {
                return Err(ConnectionError::PortSaturated {
                    name: port.name.clone(),
                    max: port.max_connections.unwrap_or_default(),
                });
            }
        }

        self.links.entry(input).or_default().push(output);
        self.links.entry(output).or_default().push(input);
        tracing::trace!(%sink, %input, %source, %output, "connected ports");
        Ok(())
    }

    /// Name-based variant of [`Graph::connect`], as used by the editor.
    pub fn wire(
        &mut self,
        sink: BlockId,
        input: &str,
        source: BlockId,
        output: &str,
    ) -> Result<(), ConnectionError> {
        let input_id = self.resolve(sink, input, PortDirection::Input)?;
        let output_id = self.resolve(source, output, PortDirection::Output)?;
        self.connect(sink, input_id, source, output_id)
    }

    /// Removes every edge touching any port of `block`, on both endpoints.
    pub fn detach_block(&mut self, block: BlockId) -> Result<(), GraphError> {
        let ports: Vec<PortId> = {
            let block = self.block(block).ok_or(GraphError::UnknownBlock(block))?;
            block.inputs.iter().chain(&block.outputs).copied().collect()
        };

        let mut removed = 0;
        for port in &ports {
            for peer in self.links.remove(port).unwrap_or_default() {
                if let Some(peer_links) = self.links.get_mut(&peer) {
                    peer_links.retain(|p| p != port);
                    if peer_links.is_empty() {
                        self.links.remove(&peer);
                    }
                }
                removed += 1;
            }
        }
        tracing::debug!(%block, edges = removed, "detached block");
        Ok(())
    }

    fn owned_port(
        &self,
        block: BlockId,
        port: PortId,
        direction: PortDirection,
    ) -> Result<&Port, ConnectionError> {
        let owner = self
            .block(block)
            .ok_or(ConnectionError::UnknownBlock(block))?;
        let not_owned = ConnectionError::PortNotOwned {
            port,
            block,
            expected: direction.as_str(),
        };
        if !owner.owns(port, direction) {
            return Err(not_owned);
        }
        self.port(port).ok_or(not_owned)
    }

    fn resolve(
        &self,
        block: BlockId,
        name: &str,
        direction: PortDirection,
    ) -> Result<PortId, ConnectionError> {
        if self.block(block).is_none() {
            return Err(ConnectionError::UnknownBlock(block));
        }
        let found = match direction {
            PortDirection::Input => self.input(block, name),
            PortDirection::Output => self.output(block, name),
        };
        found.ok_or_else(|| ConnectionError::UnknownPort {
            block,
            name: name.to_string(),
            direction: direction.as_str(),
        })
    }
}
